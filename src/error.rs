//! Error handling for mbox export operations.
//!
//! Provides error types with path context for directory listing,
//! per-file reads and report output failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MboxError {
    #[error("Cannot read import directory: {path}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read message file: {path}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report: {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl MboxError {
    /// Whether this error belongs to a single input file rather than the whole batch
    pub fn is_per_file(&self) -> bool {
        matches!(self, MboxError::FileUnreadable { .. })
    }
}

pub type Result<T> = std::result::Result<T, MboxError>;
