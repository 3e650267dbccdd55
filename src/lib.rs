//! Mbox Log Export Library
//!
//! Converts a directory of raw RFC 5322 email messages into a single CSV
//! delivery log.
//!
//! This library provides tools for:
//! - Parsing CRLF-delimited message headers, including folded fields
//! - Separating the header block from the message body
//! - Projecting parsed messages onto a fixed 18-column log layout
//! - Running the whole conversion as a sequential batch

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod header;
pub mod models;
pub mod processor;
pub mod report;

pub use config::{ExportConfig, FailurePolicy};
pub use error::{MboxError, Result};
pub use header::{parse_message, parse_message_file};
pub use models::{HeaderField, LogRow, ParsedMessage, ProcessingStats};
pub use processor::LogExporter;
pub use report::render_report;
