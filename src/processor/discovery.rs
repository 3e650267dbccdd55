//! Input discovery for message directories
//!
//! Lists the message files directly inside the import directory in a
//! stable order so repeated runs produce identical reports.

use crate::error::{MboxError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Discover message files in the import directory
///
/// The listing is not recursive: subdirectories are skipped. Files are
/// returned sorted by file name.
pub fn list_input_files(import_directory: &Path) -> Result<Vec<PathBuf>> {
    let unreadable = |source| MboxError::DirectoryUnreadable {
        path: import_directory.to_path_buf(),
        source,
    };

    let mut files = Vec::new();

    for entry in fs::read_dir(import_directory).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        let path = entry.path();

        // Follows symlinks; a dangling link is kept and fails when read
        if path.is_dir() {
            debug!("Skipping subdirectory: {}", path.display());
            continue;
        }

        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    debug!(
        "Found {} message files in {}",
        files.len(),
        import_directory.display()
    );

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_lists_files_sorted_by_name() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["c.eml", "a.eml", "b"] {
            fs::write(temp_dir.path().join(name), "Subject: x\r\n\r\n").unwrap();
        }

        let files = list_input_files(temp_dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["a.eml", "b", "c.eml"]);
    }

    #[test]
    fn test_skips_subdirectories() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("nested")).unwrap();
        fs::write(temp_dir.path().join("nested").join("inner.eml"), "x").unwrap();
        fs::write(temp_dir.path().join("outer.eml"), "x").unwrap();

        let files = list_input_files(temp_dir.path()).unwrap();

        assert_eq!(files, vec![temp_dir.path().join("outer.eml")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_skips_symlinked_subdirectories() {
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new().unwrap();
        let import_path = temp_dir.path().join("import");
        let elsewhere = temp_dir.path().join("elsewhere");
        fs::create_dir_all(&import_path).unwrap();
        fs::create_dir_all(&elsewhere).unwrap();
        fs::write(import_path.join("a.eml"), "x").unwrap();
        fs::create_dir(import_path.join("real-sub")).unwrap();
        symlink(&elsewhere, import_path.join("linked-sub")).unwrap();
        symlink(temp_dir.path().join("missing"), import_path.join("dangling.eml")).unwrap();

        let files = list_input_files(&import_path).unwrap();

        assert_eq!(
            files,
            vec![import_path.join("a.eml"), import_path.join("dangling.eml")]
        );
    }

    #[test]
    fn test_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(list_input_files(temp_dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nonexistent");

        match list_input_files(&missing) {
            Err(MboxError::DirectoryUnreadable { path, .. }) => assert_eq!(path, missing),
            other => panic!("Expected DirectoryUnreadable error, got {:?}", other),
        }
    }
}
