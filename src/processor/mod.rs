//! Batch driver for mbox log export.
//!
//! Orchestrates the export workflow: input discovery, per-file header
//! parsing, report rendering and CSV output. Everything runs
//! sequentially; each message file is parsed independently.

pub mod discovery;
pub mod writer;

#[cfg(test)]
pub mod tests;

use crate::config::{ExportConfig, FailurePolicy};
use crate::error::Result;
use crate::header::parse_message_file;
use crate::models::{ParsedMessage, ProcessingStats};
use crate::report;

use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Messages parsed from one batch plus the files that were skipped
#[derive(Debug, Default)]
pub struct ParseOutcome {
    pub messages: Vec<ParsedMessage>,
    pub failed: Vec<PathBuf>,
}

/// Driver converting a directory of messages into a CSV log
#[derive(Debug)]
pub struct LogExporter {
    config: ExportConfig,
}

impl LogExporter {
    /// Create a new exporter after validating the configuration
    pub fn new(config: ExportConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// List the message files in the import directory
    pub fn list_input_files(&self) -> Result<Vec<PathBuf>> {
        discovery::list_input_files(&self.config.import_directory)
    }

    /// Parse every file in listing order
    ///
    /// Under [`FailurePolicy::Abort`] the first unreadable file ends the
    /// batch with its error. Under [`FailurePolicy::Skip`] it is logged
    /// and recorded in [`ParseOutcome::failed`].
    pub fn parse_all(&self, files: &[PathBuf]) -> Result<ParseOutcome> {
        let pb = self.create_progress_bar(files.len() as u64);
        let mut outcome = ParseOutcome {
            messages: Vec::with_capacity(files.len()),
            failed: Vec::new(),
        };

        for file_path in files {
            if let Some(file_name) = file_path.file_name() {
                pb.set_message(file_name.to_string_lossy().into_owned());
            }

            match parse_message_file(file_path) {
                Ok(message) => outcome.messages.push(message),
                Err(e) if e.is_per_file() && self.config.failure_policy == FailurePolicy::Skip => {
                    warn!("Skipping {}: {:#}", file_path.display(), e);
                    outcome.failed.push(file_path.clone());
                }
                Err(e) => {
                    pb.abandon();
                    return Err(e);
                }
            }

            pb.inc(1);
        }

        pb.finish_and_clear();
        Ok(outcome)
    }

    /// Render the CSV log for parsed messages
    pub fn render_report(&self, messages: &[ParsedMessage]) -> String {
        report::render_report(messages)
    }

    /// Write the rendered log and return its path
    pub fn write_report(&self, report: &str) -> Result<PathBuf> {
        let output_path = self.config.output_path();
        writer::write_report(&output_path, report)?;
        Ok(output_path)
    }

    /// Run the complete export
    pub fn run(&self) -> Result<ProcessingStats> {
        let start_time = Instant::now();

        info!(
            "Exporting messages from {} to {}",
            self.config.import_directory.display(),
            self.config.export_directory.display()
        );

        let files = self.list_input_files()?;
        let outcome = self.parse_all(&files)?;

        let report = self.render_report(&outcome.messages);
        let output_path = self.write_report(&report)?;

        let stats = ProcessingStats {
            files_discovered: files.len(),
            files_processed: outcome.messages.len(),
            files_failed: outcome.failed.len(),
            rows_written: outcome.messages.len(),
            output_path,
            processing_time_ms: start_time.elapsed().as_millis(),
        };

        debug!("Export finished: {:?}", stats);
        Ok(stats)
    }

    fn create_progress_bar(&self, total: u64) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        pb.set_style(style);
        pb
    }
}
