use anyhow::Result;
use clap::Parser;
use redcap_extract::{cli::Args, config::executable_dir, pipeline};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();

    // ─── 2) arguments → validated config ─────────────────────────────
    let config = Args::parse().into_config()?;
    debug!(?config, "parsed arguments");

    // ─── 3) fetch, filter, write ─────────────────────────────────────
    let base = executable_dir()?;
    pipeline::run(&config, &base)?;
    Ok(())
}
