//! Jot - a minimal content-addressable version-control object store
//!
//! Jot turns a snapshot of a working directory into an immutable,
//! content-addressed graph of objects (file blobs, directory trees,
//! commits) and publishes that graph durably to disk.
//!
//! # Core pieces
//!
//! - **Object model**: blob/tree/commit with a canonical, byte-deterministic
//!   serialization; every object is addressed by the SHA-1 of its serialized
//!   form.
//! - **Tree builder**: folds the workspace's flat file listing into a nested
//!   tree hierarchy, child trees hashed before their parents.
//! - **Object database**: fan-out directory layout, zstd compression, and
//!   atomic temp-file-then-rename publication with structural deduplication.
//! - **Commit assembler**: blobs, then trees, then the commit, then HEAD,
//!   in that order.
//!
//! # Example
//!
//! ```rust,no_run
//! use jot::core::object::Author;
//! use jot::repository::Repository;
//! use std::path::Path;
//!
//! let repo = Repository::init(Path::new("./my-project"))?;
//! let author = Author::new(
//!     "Alice".into(),
//!     "alice@example.com".into(),
//!     chrono::Local::now().fixed_offset(),
//! );
//! let summary = repo.commit(author, "initial commit\n")?;
//! println!("{}", summary.oid);
//! # Ok::<(), jot::core::error::JotError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod repository;
pub mod storage;
pub mod workspace;

// Re-export commonly used types
pub use crate::core::{
    error::{JotError, Result},
    object::{Author, Blob, Commit, FileMode, Object},
    oid::ObjectId,
    tree::{FileEntry, Tree},
};

pub use repository::{commit::CommitSummary, Repository};
pub use storage::{Database, ObjectStore};
pub use workspace::Workspace;

/// Current version of Jot
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
