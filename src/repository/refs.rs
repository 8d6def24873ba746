//! HEAD reference bookkeeping for Jot
//!
//! HEAD holds the 40-hex id of the latest commit, newline-terminated. It is
//! only ever rewritten after the commit object it points at has been durably
//! stored.

use crate::core::error::{JotError, Result};
use crate::core::oid::ObjectId;
use std::fs;
use std::path::PathBuf;

/// Reference file access rooted at the repository metadata directory
pub struct Refs {
    jot_path: PathBuf,
}

impl Refs {
    /// Create a refs handle for a `.jot` directory
    pub fn new(jot_path: impl Into<PathBuf>) -> Self {
        Self {
            jot_path: jot_path.into(),
        }
    }

    /// Path of the HEAD file
    pub fn head_path(&self) -> PathBuf {
        self.jot_path.join("HEAD")
    }

    /// Read the current HEAD commit id, or None before the first commit
    pub fn read_head(&self) -> Result<Option<ObjectId>> {
        let path = self.head_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        let trimmed = content.trim();
        let oid = ObjectId::from_hex(trimmed)
            .map_err(|_| JotError::corrupt_head(format!("not a valid object id: {trimmed:?}")))?;
        Ok(Some(oid))
    }

    /// Overwrite HEAD with a new commit id
    pub fn update_head(&self, oid: &ObjectId) -> Result<()> {
        fs::write(self.head_path(), format!("{}\n", oid.to_hex()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::oid::sha1;
    use tempfile::TempDir;

    #[test]
    fn test_head_absent_before_first_commit() {
        let temp = TempDir::new().unwrap();
        let refs = Refs::new(temp.path());
        assert_eq!(refs.read_head().unwrap(), None);
    }

    #[test]
    fn test_update_then_read_head() {
        let temp = TempDir::new().unwrap();
        let refs = Refs::new(temp.path());
        let oid = sha1(b"a commit");

        refs.update_head(&oid).unwrap();

        let written = fs::read_to_string(refs.head_path()).unwrap();
        assert_eq!(written, format!("{}\n", oid.to_hex()));
        assert_eq!(refs.read_head().unwrap(), Some(oid));
    }

    #[test]
    fn test_corrupt_head_is_an_error() {
        let temp = TempDir::new().unwrap();
        let refs = Refs::new(temp.path());
        fs::write(refs.head_path(), "not-an-oid\n").unwrap();

        assert!(matches!(
            refs.read_head(),
            Err(JotError::CorruptHead { .. })
        ));
    }
}
