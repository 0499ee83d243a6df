//! Command-line surface: six positional arguments, no flags.

use clap::Parser;

use crate::{config::ExtractConfig, error::Result, process::HeaderMode};

/// Extract one field group for every participant in a REDCap study.
///
/// Only rows with data in the first requested field (the secondary key) are
/// kept.
#[derive(Parser, Debug)]
#[command(name = "redcap-extract")]
#[command(version)]
pub struct Args {
    /// URL of the REDCap server API, e.g. https://redcap.vanderbilt.edu/api/
    pub redcap_server: String,

    /// API token issued by the REDCap administrator
    pub user_token: String,

    /// Field identifying the participant, e.g. record_id
    pub primary_key: String,

    /// Comma-separated fields to extract; rows without data in the first are dropped
    pub fields: String,

    /// `IncludeHeader` to process the first response line as a row; anything else skips it
    pub include_header: HeaderMode,

    /// Name of the CSV file written under output_data/
    pub output_file: String,
}

impl Args {
    pub fn into_config(self) -> Result<ExtractConfig> {
        ExtractConfig::new(
            &self.redcap_server,
            &self.user_token,
            &self.primary_key,
            &self.fields,
            self.include_header,
            &self.output_file,
        )
    }
}
