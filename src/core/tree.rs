//! Tree construction for Jot
//!
//! Converts the workspace's flat, `/`-separated file listing into the nested
//! tree hierarchy that gets stored. Trees are built bottom-up: a tree's own
//! id depends on the ids of everything inside it, so every child tree is
//! serialized and hashed before its parent entry is constructed.

use crate::core::error::{JotError, Result};
use crate::core::object::{serialize_with_header, FileMode};
use crate::core::oid::{sha1, ObjectId};
use std::collections::BTreeMap;

/// One file from the workspace listing, input to the tree builder
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Path relative to the repository root, `/` separated
    pub path: String,
    /// Content address of the file's blob
    pub oid: ObjectId,
    /// File mode derived from filesystem permissions
    pub mode: FileMode,
}

impl FileEntry {
    pub fn new(path: impl Into<String>, oid: ObjectId, mode: FileMode) -> Self {
        Self {
            path: path.into(),
            oid,
            mode,
        }
    }
}

/// A named reference to a blob or subtree within one directory level
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,
    pub oid: ObjectId,
    pub mode: FileMode,
}

impl Entry {
    /// Byte key used for canonical ordering. Directory names compare as if
    /// a trailing separator were appended, which disambiguates a file and a
    /// directory sharing a name prefix.
    fn sort_key(&self) -> Vec<u8> {
        let mut key = self.name.as_bytes().to_vec();
        if self.mode.is_directory() {
            key.push(b'/');
        }
        key
    }
}

/// One directory level of the snapshot: a canonically ordered entry list
/// plus the already-built child trees it references
#[derive(Debug, Clone)]
pub struct Tree {
    entries: Vec<Entry>,
    subtrees: Vec<Tree>,
    oid: ObjectId,
}

impl Tree {
    /// Build the nested tree hierarchy from a flat list of file entries.
    ///
    /// Groups entries by leading path segment and recurses on the remainder;
    /// each group that is not a bare filename becomes a directory entry
    /// carrying the finished child tree's id. An empty listing is rejected
    /// so no empty root tree is ever stored.
    pub fn build(files: &[FileEntry]) -> Result<Tree> {
        if files.is_empty() {
            return Err(JotError::NothingToCommit);
        }
        let mut split = Vec::with_capacity(files.len());
        for file in files {
            if file.mode.is_directory() {
                return Err(JotError::invalid_file_path(&file.path));
            }
            split.push((split_path(&file.path)?, file.oid, file.mode));
        }
        build_level(split)
    }

    /// Canonically ordered entries at this level
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Serialized tree content: `"<mode> <name>\0"` plus the referenced
    /// object's raw id bytes, per entry in canonical order
    pub fn content(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        for entry in &self.entries {
            bytes.extend_from_slice(entry.mode.as_octal().as_bytes());
            bytes.push(b' ');
            bytes.extend_from_slice(entry.name.as_bytes());
            bytes.push(0);
            bytes.extend_from_slice(entry.oid.as_bytes());
        }
        bytes
    }

    /// The tree's content address, fixed at build time
    pub fn oid(&self) -> ObjectId {
        self.oid
    }

    /// Visit this tree and every child tree in post-order, children first,
    /// so each tree is stored before anything that references it
    pub fn traverse<F>(&self, f: &mut F) -> Result<()>
    where
        F: FnMut(&Tree) -> Result<ObjectId>,
    {
        for subtree in &self.subtrees {
            subtree.traverse(f)?;
        }
        f(self)?;
        Ok(())
    }
}

type SplitEntry = (Vec<String>, ObjectId, FileMode);

fn build_level(entries: Vec<SplitEntry>) -> Result<Tree> {
    let mut groups: BTreeMap<String, Vec<SplitEntry>> = BTreeMap::new();
    for (mut segments, oid, mode) in entries {
        let head = segments.remove(0);
        groups.entry(head).or_default().push((segments, oid, mode));
    }

    let mut entries = Vec::new();
    let mut subtrees = Vec::new();
    for (name, members) in groups {
        let is_leaf = members.len() == 1 && members[0].0.is_empty();
        if is_leaf {
            let (_, oid, mode) = members.into_iter().next().unwrap();
            entries.push(Entry { name, oid, mode });
        } else {
            // A leaf here means the name is used both as a file and as a
            // directory, or the same path appeared twice.
            if members.iter().any(|(rest, _, _)| rest.is_empty()) {
                return Err(JotError::DuplicateTreeEntry { name });
            }
            let child = build_level(members)?;
            entries.push(Entry {
                name,
                oid: child.oid(),
                mode: FileMode::Directory,
            });
            subtrees.push(child);
        }
    }

    entries.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

    let mut tree = Tree {
        entries,
        subtrees,
        oid: ObjectId::from_bytes([0; 20]),
    };
    tree.oid = sha1(&serialize_with_header("tree", &tree.content()));
    Ok(tree)
}

/// Split a repository-relative path into its segments, rejecting anything
/// that could escape the repository root
fn split_path(path: &str) -> Result<Vec<String>> {
    if path.is_empty() || path.starts_with('/') || path.ends_with('/') {
        return Err(JotError::invalid_file_path(path));
    }
    let mut segments = Vec::new();
    for segment in path.split('/') {
        if segment.is_empty() || segment == "." || segment == ".." {
            return Err(JotError::invalid_file_path(path));
        }
        segments.push(segment.to_string());
    }
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn file(path: &str, content: &[u8]) -> FileEntry {
        let oid = sha1(&serialize_with_header("blob", content));
        FileEntry::new(path, oid, FileMode::Regular)
    }

    #[test]
    fn test_single_file_tree() {
        let tree = Tree::build(&[file("hello.txt", b"hi\n")]).unwrap();
        assert_eq!(tree.entries().len(), 1);
        assert_eq!(tree.entries()[0].name, "hello.txt");
        assert_eq!(tree.entries()[0].mode, FileMode::Regular);
        // Matches `git write-tree` for the same single-file index
        assert_eq!(
            tree.oid().to_hex(),
            "7a2871192d49caaff5451df37b27afc373d8298b"
        );
    }

    #[test]
    fn test_permutation_invariance() {
        let entries = vec![
            file("b.txt", b"b"),
            file("a.txt", b"a"),
            file("dir/nested.txt", b"n"),
        ];
        let mut shuffled = entries.clone();
        shuffled.rotate_left(1);

        let first = Tree::build(&entries).unwrap();
        let second = Tree::build(&shuffled).unwrap();
        assert_eq!(first.content(), second.content());
        assert_eq!(first.oid(), second.oid());
    }

    #[test]
    fn test_nested_path_builds_subtree_chain() {
        let tree = Tree::build(&[file("a/b/c.txt", b"data\n")]).unwrap();
        assert_eq!(tree.entries().len(), 1);
        assert_eq!(tree.entries()[0].name, "a");
        assert_eq!(tree.entries()[0].mode, FileMode::Directory);

        let mut stored = Vec::new();
        tree.traverse(&mut |t: &Tree| {
            stored.push(t.oid());
            Ok(t.oid())
        })
        .unwrap();
        // Children first: a/b, then a, then the root
        assert_eq!(stored.len(), 3);
        assert_eq!(stored[2], tree.oid());
        assert_eq!(tree.entries()[0].oid, stored[1]);
    }

    #[test]
    fn test_directory_sorts_after_file_with_shared_prefix() {
        // "foo.txt" (0x2e after the prefix) must sort before the directory
        // "foo", whose name compares as "foo/" (0x2f).
        let tree = Tree::build(&[file("foo/inner.txt", b"x"), file("foo.txt", b"y")]).unwrap();
        let names: Vec<_> = tree.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["foo.txt", "foo"]);
    }

    #[test]
    fn test_plain_name_sorting_is_bytewise() {
        let tree = Tree::build(&[file("b.txt", b"1"), file("B.txt", b"2"), file("a.txt", b"3")])
            .unwrap();
        let names: Vec<_> = tree.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["B.txt", "a.txt", "b.txt"]);
    }

    #[test]
    fn test_empty_listing_is_rejected() {
        assert!(matches!(Tree::build(&[]), Err(JotError::NothingToCommit)));
    }

    #[test]
    fn test_path_escaping_root_is_fatal() {
        for path in ["../escape.txt", "a/../../b.txt", "/abs.txt", "a//b.txt", "a/"] {
            let result = Tree::build(&[file(path, b"x")]);
            assert!(
                matches!(result, Err(JotError::InvalidFilePath { .. })),
                "{path} should be rejected"
            );
        }
    }

    #[test]
    fn test_name_used_as_file_and_directory_is_fatal() {
        let result = Tree::build(&[file("a", b"x"), file("a/b.txt", b"y")]);
        assert!(matches!(result, Err(JotError::DuplicateTreeEntry { .. })));
    }

    #[test]
    fn test_duplicate_path_is_fatal() {
        let result = Tree::build(&[file("same.txt", b"x"), file("same.txt", b"x")]);
        assert!(matches!(result, Err(JotError::DuplicateTreeEntry { .. })));
    }
}
