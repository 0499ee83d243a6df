pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod process;

pub use config::ExtractConfig;
pub use error::{ExtractError, Result};
pub use pipeline::{run, RunSummary};
