//! Commit assembly for Jot
//!
//! Orchestrates one commit: blobs are stored before any tree entry
//! referencing them is serialized, every tree is stored before the commit
//! referencing the root, and HEAD moves only after the commit object's
//! store call has returned. A failure anywhere earlier leaves HEAD
//! untouched; already-stored objects remain as harmless unreferenced
//! entries in the database.

use crate::core::error::Result;
use crate::core::object::{Author, Blob, Commit, Object};
use crate::core::oid::ObjectId;
use crate::core::tree::{FileEntry, Tree};
use crate::repository::Repository;
use crate::storage::ObjectStore;
use tracing::{debug, info};

/// Outcome of a successful commit, for the frontend's confirmation line
#[derive(Debug, Clone)]
pub struct CommitSummary {
    /// Id of the new commit object
    pub oid: ObjectId,
    /// First line of the commit message
    pub title: String,
    /// Whether this commit has no parent
    pub is_root: bool,
}

/// Build the tree hierarchy for a file listing and store every level,
/// children before parents. Returns the root tree's id.
pub fn store_snapshot(store: &impl ObjectStore, entries: &[FileEntry]) -> Result<ObjectId> {
    let root = Tree::build(entries)?;
    root.traverse(&mut |tree: &Tree| store.store(&Object::Tree(tree.clone())))?;
    Ok(root.oid())
}

impl Repository {
    /// Snapshot the workspace as a new commit and advance HEAD
    pub fn commit(&self, author: Author, message: &str) -> Result<CommitSummary> {
        let mut entries = Vec::new();
        for path in self.workspace().list_files()? {
            let data = self.workspace().read_file(&path)?;
            let mode = self.workspace().file_mode(&path)?;
            let oid = self.database().store(&Object::Blob(Blob::new(data)))?;
            debug!(path = %path, oid = %oid, "stored blob");
            entries.push(FileEntry::new(path, oid, mode));
        }

        let tree_oid = store_snapshot(self.database(), &entries)?;

        let parent = self.refs().read_head()?;
        let commit = Commit::new(tree_oid, parent, author, message.to_string())?;
        let title = commit.title_line().to_string();
        let is_root = commit.is_root();

        let oid = self.database().store(&Object::Commit(commit))?;
        self.refs().update_head(&oid)?;

        info!(
            oid = %oid,
            files = entries.len(),
            root_commit = is_root,
            "created commit"
        );
        Ok(CommitSummary {
            oid,
            title,
            is_root,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::JotError;
    use crate::core::object::FileMode;
    use crate::core::oid::sha1;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    /// In-memory object store, keyed by id like the on-disk fan-out
    #[derive(Default)]
    struct MemoryStore {
        objects: Mutex<BTreeMap<ObjectId, Vec<u8>>>,
    }

    impl MemoryStore {
        fn len(&self) -> usize {
            self.objects.lock().unwrap().len()
        }

        fn contains(&self, oid: &ObjectId) -> bool {
            self.objects.lock().unwrap().contains_key(oid)
        }
    }

    impl ObjectStore for MemoryStore {
        fn store(&self, object: &Object) -> Result<ObjectId> {
            let serialized = object.serialize();
            let oid = sha1(&serialized);
            self.objects
                .lock()
                .unwrap()
                .entry(oid)
                .or_insert(serialized);
            Ok(oid)
        }
    }

    fn entry(path: &str, content: &[u8]) -> FileEntry {
        let oid = Object::Blob(Blob::new(content.to_vec())).oid();
        FileEntry::new(path, oid, FileMode::Regular)
    }

    #[test]
    fn test_snapshot_stores_every_tree_level() {
        let store = MemoryStore::default();
        let root_oid = store_snapshot(&store, &[entry("a/b/c.txt", b"data\n")]).unwrap();

        // Root, a, and a/b
        assert_eq!(store.len(), 3);
        assert!(store.contains(&root_oid));
        assert_eq!(
            root_oid.to_hex(),
            "dd110c42d1fe0aab76562deec5757f962f24ead1"
        );
    }

    #[test]
    fn test_snapshot_of_flat_listing_stores_one_tree() {
        let store = MemoryStore::default();
        store_snapshot(&store, &[entry("a.txt", b"a"), entry("b.txt", b"b")]).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_empty_snapshot_stores_nothing() {
        let store = MemoryStore::default();
        let result = store_snapshot(&store, &[]);
        assert!(matches!(result, Err(JotError::NothingToCommit)));
        assert_eq!(store.len(), 0);
    }
}
