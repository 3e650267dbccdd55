//! RFC 5322 header parsing and body extraction.
//!
//! Scans CRLF-delimited message lines, unfolds continuation lines for
//! the fields that use folding, and splits the header block from the
//! body at the first blank line.

use crate::constants::{
    CONTINUATION_MARKER, FIELD_DELIMITER, LINE_DELIMITER, UNFOLD_SEPARATOR,
};
use crate::error::{MboxError, Result};
use crate::models::{HeaderField, ParsedMessage};
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

/// Read a message file and parse its headers and body
pub fn parse_message_file(file_path: &Path) -> Result<ParsedMessage> {
    let data = fs::read(file_path).map_err(|source| MboxError::FileUnreadable {
        path: file_path.to_path_buf(),
        source,
    })?;

    let message = parse_message(&data);

    debug!(
        "Parsed {}: {} received hops, {} body bytes",
        file_path.display(),
        message.received().len(),
        message.content().len()
    );

    Ok(message)
}

/// Parse raw message bytes into a [`ParsedMessage`]
///
/// Never fails: unrecognized lines are skipped and missing fields stay
/// empty. Content that does not use CRLF line endings is read as one
/// long line.
pub fn parse_message(data: &[u8]) -> ParsedMessage {
    let text = String::from_utf8_lossy(data);
    let lines: Vec<&str> = text.split(LINE_DELIMITER).collect();

    let mut message = ParsedMessage::default();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        let Some((name, value)) = line.split_once(FIELD_DELIMITER) else {
            if line.is_empty() {
                message.set_content(lines[i + 1..].join(UNFOLD_SEPARATOR));
                break;
            }
            i += 1;
            continue;
        };

        let Some(field) = HeaderField::from_name(name) else {
            trace!("Ignoring header field '{}'", name);
            i += 1;
            continue;
        };

        if field.is_folded() {
            let (continuation, next) = collect_continuation(&lines, i + 1);
            trace!("{} folded over {} lines", field.name(), continuation.len() + 1);
            message.set(field, unfold(value, continuation));
            i = next;
        } else {
            message.set(field, value.to_string());
            i += 1;
        }
    }

    message
}

/// Collect the continuation lines starting at `start`
///
/// Returns the run of lines beginning with a space together with the
/// index of the first line that is not part of it. An empty line or
/// the end of input ends the run.
pub fn collect_continuation<'a>(lines: &'a [&'a str], start: usize) -> (&'a [&'a str], usize) {
    let start = start.min(lines.len());
    let end = lines[start..]
        .iter()
        .position(|line| !line.starts_with(CONTINUATION_MARKER))
        .map_or(lines.len(), |offset| start + offset);

    (&lines[start..end], end)
}

/// Join a value prefix with its continuation lines
fn unfold(prefix: &str, continuation: &[&str]) -> String {
    let mut value = String::from(prefix);
    for line in continuation {
        value.push_str(UNFOLD_SEPARATOR);
        value.push_str(line);
    }
    value
}
