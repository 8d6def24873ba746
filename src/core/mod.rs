//! Core object model for Jot
//!
//! Defines object identity, the blob/tree/commit object model with its
//! canonical serialization, and the tree builder.

pub mod error;
pub mod object;
pub mod oid;
pub mod tree;

pub use error::{JotError, Result};
pub use object::{Author, Blob, Commit, FileMode, Object};
pub use oid::ObjectId;
pub use tree::{Entry, FileEntry, Tree};
