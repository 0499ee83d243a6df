use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

use crate::{
    config::ExtractConfig,
    error::Result,
    fetch::{build_client, fetch_lines},
    process::{save_rows, FilterStats},
};

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub stats: FilterStats,
}

/// Fetch, filter, write. `base` is the directory holding `output_data/`.
pub fn run(config: &ExtractConfig, base: &Path) -> Result<RunSummary> {
    let start = Instant::now();
    info!("Extracting [{}] data from REDCap", config.request.secondary_key());

    let client = build_client()?;
    let lines = fetch_lines(&client, &config.server, &config.request)?;

    let output_path = config.output_path(base);
    let stats = save_rows(&lines, &output_path, config.header_mode)?;

    info!("CSV list saved to {}", output_path.display());
    info!(elapsed = ?start.elapsed(), rows = stats.written, "done");
    Ok(RunSummary { output_path, stats })
}
