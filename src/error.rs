use std::{io, path::PathBuf, string::FromUtf8Error};
use thiserror::Error;

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Every way an extraction run can fail. None of these are recovered from.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Invalid run parameters (bad server URL, empty field list, ...)
    #[error("configuration error: {0}")]
    Config(String),

    /// Connection, TLS or non-2xx status from the REDCap server
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Response body was not valid UTF-8
    #[error("response body is not valid UTF-8: {0}")]
    Decode(#[from] FromUtf8Error),

    /// A response row too narrow to carry primary key, event and secondary key
    #[error("line {line}: expected at least 3 columns, found {found}")]
    Shape { line: usize, found: usize },

    /// Destination could not be created or written
    #[error("cannot write {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// CSV tokenizing or serialization failure
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl ExtractError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        ExtractError::Config(msg.into())
    }
}
