//! Storable object model for Jot
//!
//! Every object serializes to a header `"<type> <content-len>\0"` followed by
//! its content bytes. The object id is the SHA-1 digest of that full byte
//! sequence, so serialization must be byte-for-byte deterministic.

use crate::core::error::{JotError, Result};
use crate::core::oid::{sha1, ObjectId};
use crate::core::tree::Tree;
use chrono::{DateTime, FixedOffset};
use std::fmt;

/// File mode of a tree entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileMode {
    /// Regular file (0644 permissions)
    Regular,
    /// Executable file (any execute bit set)
    Executable,
    /// Directory, referencing a subtree
    Directory,
}

impl FileMode {
    /// ASCII octal form used in tree serialization
    pub fn as_octal(&self) -> &'static str {
        match self {
            FileMode::Regular => "100644",
            FileMode::Executable => "100755",
            FileMode::Directory => "40000",
        }
    }

    /// Derive a file mode from Unix permission bits
    pub fn from_unix_mode(mode: u32) -> Self {
        if mode & 0o111 != 0 {
            FileMode::Executable
        } else {
            FileMode::Regular
        }
    }

    /// Whether this mode marks a directory entry
    pub fn is_directory(&self) -> bool {
        matches!(self, FileMode::Directory)
    }
}

/// Raw content of one workspace file
#[derive(Debug, Clone)]
pub struct Blob {
    data: Vec<u8>,
}

impl Blob {
    /// Create a blob owning the given content bytes
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// The raw content bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Commit authorship: name, email and a timestamp with timezone offset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    name: String,
    email: String,
    timestamp: DateTime<FixedOffset>,
}

impl Author {
    pub fn new(name: String, email: String, timestamp: DateTime<FixedOffset>) -> Self {
        Self {
            name,
            email,
            timestamp,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} <{}> {} {}",
            self.name,
            self.email,
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        )
    }
}

/// Snapshot metadata: root tree, optional parent, author and message
#[derive(Debug, Clone)]
pub struct Commit {
    tree: ObjectId,
    parent: Option<ObjectId>,
    author: Author,
    message: String,
}

impl Commit {
    /// Create a commit referencing a stored root tree
    pub fn new(
        tree: ObjectId,
        parent: Option<ObjectId>,
        author: Author,
        message: String,
    ) -> Result<Self> {
        if message.trim().is_empty() {
            return Err(JotError::EmptyCommitMessage);
        }
        Ok(Self {
            tree,
            parent,
            author,
            message,
        })
    }

    pub fn tree(&self) -> ObjectId {
        self.tree
    }

    pub fn parent(&self) -> Option<ObjectId> {
        self.parent
    }

    /// Whether this commit has no parent
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the commit message, used for the confirmation output
    pub fn title_line(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    fn content_bytes(&self) -> Vec<u8> {
        let mut lines = String::new();
        lines.push_str(&format!("tree {}\n", self.tree.to_hex()));
        if let Some(parent) = &self.parent {
            lines.push_str(&format!("parent {}\n", parent.to_hex()));
        }
        lines.push_str(&format!("author {}\n", self.author));
        lines.push_str(&format!("committer {}\n", self.author));
        lines.push('\n');
        lines.push_str(&self.message);
        lines.into_bytes()
    }
}

/// The closed set of storable object kinds
#[derive(Debug, Clone)]
pub enum Object {
    Blob(Blob),
    Tree(Tree),
    Commit(Commit),
}

impl Object {
    /// Type tag used in the serialization header
    pub fn kind(&self) -> &'static str {
        match self {
            Object::Blob(_) => "blob",
            Object::Tree(_) => "tree",
            Object::Commit(_) => "commit",
        }
    }

    /// Canonical content bytes, without the header
    pub fn content(&self) -> Vec<u8> {
        match self {
            Object::Blob(blob) => blob.data().to_vec(),
            Object::Tree(tree) => tree.content(),
            Object::Commit(commit) => commit.content_bytes(),
        }
    }

    /// Full canonical byte sequence: header plus content
    pub fn serialize(&self) -> Vec<u8> {
        serialize_with_header(self.kind(), &self.content())
    }

    /// The object's content address
    pub fn oid(&self) -> ObjectId {
        sha1(&self.serialize())
    }
}

/// Prefix content bytes with the canonical `"<type> <len>\0"` header
pub(crate) fn serialize_with_header(kind: &str, content: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(kind.len() + 12 + content.len());
    bytes.extend_from_slice(kind.as_bytes());
    bytes.push(b' ');
    bytes.extend_from_slice(content.len().to_string().as_bytes());
    bytes.push(0);
    bytes.extend_from_slice(content);
    bytes
}
