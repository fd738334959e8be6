//! Error types for hrdesk operations

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for hrdesk operations
#[derive(Error, Debug)]
pub enum HrdeskError {
    /// Source table could not be read
    #[error("Failed to read source table '{path}': {source}")]
    TableRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source table is malformed (bad row, missing column, wrong type)
    #[error("Malformed source table '{path}': {source}")]
    TableFormat {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// FAQ corpus has no usable entries
    #[error("FAQ corpus is empty, nothing to index")]
    EmptyCorpus,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HrdeskError {
    /// Classify a csv error against the table it came from: unreadable
    /// files become `TableRead`, everything else is `TableFormat`.
    pub(crate) fn from_csv(path: &Path, err: csv::Error) -> Self {
        if err.is_io_error() {
            match err.into_kind() {
                csv::ErrorKind::Io(io) => HrdeskError::TableRead {
                    path: path.to_path_buf(),
                    source: io,
                },
                _ => unreachable!("is_io_error guarantees an Io kind"),
            }
        } else {
            HrdeskError::TableFormat {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }
}

/// Result type alias for hrdesk operations
pub type HrdeskResult<T> = Result<T, HrdeskError>;
