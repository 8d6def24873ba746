//! Workspace scanning for Jot
//!
//! The workspace is the directory tree being committed. It supplies a
//! deterministic, repository-relative file listing (the `.jot` metadata
//! directory excluded) and raw file contents with their modes.

use crate::core::error::Result;
use crate::core::object::FileMode;
use crate::repository::JOT_DIR;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Read access to the directory tree being committed
pub struct Workspace {
    root_path: PathBuf,
}

impl Workspace {
    /// Create a workspace rooted at the repository root
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
        }
    }

    /// The workspace root
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// List all files, sorted, as repository-relative `/`-separated paths
    pub fn list_files(&self) -> Result<Vec<String>> {
        let mut files = Vec::new();
        let walker = WalkDir::new(&self.root_path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.file_name() != std::ffi::OsStr::new(JOT_DIR));

        for entry in walker {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(&self.root_path)
                .expect("walkdir yields paths under the root");
            let segments: Vec<_> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            files.push(segments.join("/"));
        }

        files.sort();
        Ok(files)
    }

    /// Read the full raw bytes of a repository-relative path
    pub fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        Ok(fs::read(self.resolve(path))?)
    }

    /// File mode of a repository-relative path, from its permissions
    pub fn file_mode(&self, path: &str) -> Result<FileMode> {
        let metadata = fs::metadata(self.resolve(path))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            Ok(FileMode::from_unix_mode(metadata.permissions().mode()))
        }
        #[cfg(not(unix))]
        {
            let _ = metadata;
            Ok(FileMode::Regular)
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let mut resolved = self.root_path.clone();
        for segment in path.split('/') {
            resolved.push(segment);
        }
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, path: &str, content: &[u8]) {
        let full = root.join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, content).unwrap();
    }

    #[test]
    fn test_listing_is_sorted_and_relative() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "b.txt", b"b");
        write(temp.path(), "a/nested.txt", b"n");
        write(temp.path(), "a.txt", b"a");

        let workspace = Workspace::new(temp.path());
        let files = workspace.list_files().unwrap();
        assert_eq!(files, vec!["a.txt", "a/nested.txt", "b.txt"]);
    }

    #[test]
    fn test_metadata_directory_is_excluded() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "tracked.txt", b"t");
        write(temp.path(), ".jot/objects/ab/cdef", b"zz");

        let workspace = Workspace::new(temp.path());
        assert_eq!(workspace.list_files().unwrap(), vec!["tracked.txt"]);
    }

    #[test]
    fn test_read_file_returns_raw_bytes() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "dir/data.bin", &[0, 159, 146, 150]);

        let workspace = Workspace::new(temp.path());
        assert_eq!(
            workspace.read_file("dir/data.bin").unwrap(),
            vec![0, 159, 146, 150]
        );
    }

    #[test]
    fn test_read_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let workspace = Workspace::new(temp.path());
        assert!(workspace.read_file("absent.txt").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_executable_mode_detected() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        write(temp.path(), "run.sh", b"#!/bin/sh\n");
        let script = temp.path().join("run.sh");
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let workspace = Workspace::new(temp.path());
        assert_eq!(workspace.file_mode("run.sh").unwrap(), FileMode::Executable);
    }
}
