//! Report output for rendered CSV logs

use crate::error::{MboxError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Write the rendered report, creating the export directory if needed
pub fn write_report(output_path: &Path, report: &str) -> Result<()> {
    let write_failed = |source| MboxError::WriteFailed {
        path: output_path.to_path_buf(),
        source,
    };

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(write_failed)?;
        }
    }

    fs::write(output_path, report.as_bytes()).map_err(write_failed)?;

    debug!(
        "Wrote {} bytes to {}",
        report.len(),
        output_path.display()
    );

    Ok(())
}
