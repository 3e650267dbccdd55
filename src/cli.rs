//! Command-line interface components.

use crate::config::{ExportConfig, FailurePolicy};
use crate::constants::{
    DEFAULT_EXPORT_BLOCK_COUNT, DEFAULT_EXPORT_DIRECTORY, DEFAULT_IMPORT_DIRECTORY,
};
use crate::models::ProcessingStats;
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "mbox-log-export")]
#[command(about = "Extract RFC 5322 headers from raw email files into a CSV delivery log")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Directory containing one raw message per file
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_IMPORT_DIRECTORY)]
    pub input: PathBuf,

    /// Directory receiving output_1.csv
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_EXPORT_DIRECTORY)]
    pub output: PathBuf,

    /// Messages per output block (accepted for compatibility; a single file is always written)
    #[arg(long, value_name = "N", default_value_t = DEFAULT_EXPORT_BLOCK_COUNT)]
    pub block_count: usize,

    /// Skip unreadable message files instead of aborting the batch
    #[arg(long)]
    pub skip_invalid: bool,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Print the run summary as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    pub dump_config: bool,

    /// Increase logging verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Log level selected by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Build the export configuration from the parsed arguments
    pub fn to_config(&self) -> ExportConfig {
        let policy = if self.skip_invalid {
            FailurePolicy::Skip
        } else {
            FailurePolicy::Abort
        };

        ExportConfig::new(&self.input, &self.output)
            .with_block_count(self.block_count)
            .with_failure_policy(policy)
            .with_progress(!self.no_progress && !self.quiet && !self.json)
    }
}

/// Set up structured logging based on CLI arguments
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mbox_log_export={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Print the run summary
pub fn print_summary(stats: &ProcessingStats) {
    println!("\n{}", "Export Summary".bright_green().bold());
    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        stats.processing_time_ms.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Files processed:".bright_cyan(),
        stats.files_processed.to_string().bright_white()
    );
    if stats.files_failed > 0 {
        println!(
            "  {} {}",
            "Files skipped:".bright_red(),
            stats.files_failed.to_string().bright_red().bold()
        );
    }
    println!(
        "  {} {}",
        "Rows written:".bright_cyan(),
        stats.rows_written.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Output:".bright_cyan(),
        stats.output_path.display()
    );
}

/// Render the run summary as JSON for machine consumption
pub fn summary_json(stats: &ProcessingStats) -> serde_json::Result<String> {
    serde_json::to_string_pretty(stats)
}
