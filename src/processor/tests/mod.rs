//! Integration tests for the processor module
//!
//! Tests the complete export pipeline against temporary message directories.


use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create an import directory holding the given (file name, raw message) pairs
pub fn create_import_dir(temp_dir: &TempDir, messages: &[(&str, &str)]) -> PathBuf {
    let import_path = temp_dir.path().join("import");
    fs::create_dir_all(&import_path).unwrap();

    for (name, raw) in messages {
        fs::write(import_path.join(name), raw).unwrap();
    }

    import_path
}

/// Build a CRLF message from header lines and a body
pub fn crlf_message(headers: &[&str], body: &str) -> String {
    format!("{}\r\n\r\n{}", headers.join("\r\n"), body)
}

pub fn read_report(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}
