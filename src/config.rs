//! Configuration management and validation.
//!
//! Holds the import/export locations, output naming and the policy
//! applied when a single message file cannot be read.

use crate::constants::{
    DEFAULT_EXPORT_BLOCK_COUNT, DEFAULT_EXPORT_DIRECTORY, DEFAULT_IMPORT_DIRECTORY,
    EXPORT_BLOCK_INDEX, EXPORT_EXTENSION, EXPORT_PREFIX,
};
use crate::error::{MboxError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// What the driver does when one message file fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FailurePolicy {
    /// Abort the whole batch; no report is written
    #[default]
    Abort,
    /// Log the failure, count it and continue with the next file
    Skip,
}

/// Configuration for one export run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory holding one raw message per file
    pub import_directory: PathBuf,

    /// Directory receiving the CSV log
    pub export_directory: PathBuf,

    /// Output file name prefix
    pub export_prefix: String,

    /// Output file extension, including the dot
    pub export_extension: String,

    /// Messages per output block. Accepted but not used: a single
    /// block is always written.
    pub export_block_count: usize,

    /// Behaviour on per-file failures
    pub failure_policy: FailurePolicy,

    /// Show a progress bar while parsing
    pub show_progress: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::new(DEFAULT_IMPORT_DIRECTORY, DEFAULT_EXPORT_DIRECTORY)
    }
}

impl ExportConfig {
    /// Create a configuration for the given import and export directories
    pub fn new(import_directory: impl Into<PathBuf>, export_directory: impl Into<PathBuf>) -> Self {
        Self {
            import_directory: import_directory.into(),
            export_directory: export_directory.into(),
            export_prefix: EXPORT_PREFIX.to_string(),
            export_extension: EXPORT_EXTENSION.to_string(),
            export_block_count: DEFAULT_EXPORT_BLOCK_COUNT,
            failure_policy: FailurePolicy::default(),
            show_progress: false,
        }
    }

    /// Set the (inert) block count
    pub fn with_block_count(mut self, block_count: usize) -> Self {
        self.export_block_count = block_count;
        self
    }

    /// Set the per-file failure policy
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Enable or disable the progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Override the output file prefix
    pub fn with_export_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.export_prefix = prefix.into();
        self
    }

    /// Output file name for a block index
    pub fn output_file_name(&self, index: usize) -> String {
        format!("{}{}{}", self.export_prefix, index, self.export_extension)
    }

    /// Full path of the report written by a run
    pub fn output_path(&self) -> PathBuf {
        self.export_directory
            .join(self.output_file_name(EXPORT_BLOCK_INDEX))
    }

    /// Check the configuration before any file is touched
    pub fn validate(&self) -> Result<()> {
        if self.export_prefix.is_empty() && self.export_extension.is_empty() {
            return Err(MboxError::Configuration {
                message: "export prefix and extension cannot both be empty".to_string(),
            });
        }

        if self.export_prefix.contains(std::path::MAIN_SEPARATOR)
            || self.export_prefix.contains('/')
        {
            return Err(MboxError::Configuration {
                message: format!(
                    "export prefix '{}' must not contain a path separator",
                    self.export_prefix
                ),
            });
        }

        if is_file(&self.export_directory) {
            return Err(MboxError::Configuration {
                message: format!(
                    "export path {} is a file, expected a directory",
                    self.export_directory.display()
                ),
            });
        }

        if self.export_block_count > 0 {
            debug!(
                "Block count {} accepted; output is always a single block",
                self.export_block_count
            );
        }

        Ok(())
    }
}

fn is_file(path: &Path) -> bool {
    path.metadata().map(|m| m.is_file()).unwrap_or(false)
}
