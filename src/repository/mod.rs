//! Repository management for Jot

pub mod commit;
pub mod refs;

use crate::core::error::{JotError, Result};
use crate::storage::Database;
use crate::workspace::Workspace;
use refs::Refs;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the repository metadata directory
pub const JOT_DIR: &str = ".jot";

/// Handle to an on-disk repository: workspace, object database and refs
pub struct Repository {
    root_path: PathBuf,
    workspace: Workspace,
    database: Database,
    refs: Refs,
}

impl Repository {
    /// Initialize a repository at the given root, creating the metadata
    /// directory layout. Reinitializing an existing repository is harmless.
    pub fn init(root_path: &Path) -> Result<Repository> {
        let jot_path = root_path.join(JOT_DIR);
        for dir in ["objects", "refs"] {
            fs::create_dir_all(jot_path.join(dir))?;
        }
        Self::open(root_path)
    }

    /// Open an existing repository
    pub fn open(root_path: &Path) -> Result<Repository> {
        let jot_path = root_path.join(JOT_DIR);
        if !jot_path.is_dir() {
            return Err(JotError::repository_not_found(root_path.to_path_buf()));
        }
        Ok(Repository {
            root_path: root_path.to_path_buf(),
            workspace: Workspace::new(root_path),
            database: Database::new(jot_path.join("objects")),
            refs: Refs::new(jot_path),
        })
    }

    /// The repository root (the workspace directory)
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// The metadata directory
    pub fn jot_path(&self) -> PathBuf {
        self.root_path.join(JOT_DIR)
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_layout() {
        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();

        assert!(repo.jot_path().join("objects").is_dir());
        assert!(repo.jot_path().join("refs").is_dir());
        assert!(!repo.jot_path().join("HEAD").exists());
    }

    #[test]
    fn test_reinit_is_harmless() {
        let temp = TempDir::new().unwrap();
        Repository::init(temp.path()).unwrap();
        assert!(Repository::init(temp.path()).is_ok());
    }

    #[test]
    fn test_open_requires_metadata_directory() {
        let temp = TempDir::new().unwrap();
        assert!(matches!(
            Repository::open(temp.path()),
            Err(JotError::RepositoryNotFound { .. })
        ));
    }
}
