//! Error types for Jot

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Jot operations
#[derive(Error, Debug)]
pub enum JotError {
    /// Repository-related errors
    #[error("Repository not found: {path}")]
    RepositoryNotFound { path: PathBuf },

    /// File-related errors
    #[error("Invalid file path: {path}")]
    InvalidFilePath { path: String },

    #[error("Duplicate tree entry: {name}")]
    DuplicateTreeEntry { name: String },

    /// Commit-related errors
    #[error("Nothing to commit: workspace contains no files")]
    NothingToCommit,

    #[error("Empty commit message")]
    EmptyCommitMessage,

    #[error("HEAD is corrupted: {reason}")]
    CorruptHead { reason: String },

    /// Storage errors
    #[error("Object write failed for {oid}: {reason}")]
    ObjectWriteFailed { oid: String, reason: String },

    #[error("Compression failed: {reason}")]
    CompressionFailed { reason: String },

    /// Configuration errors
    #[error("Configuration error: {reason}")]
    ConfigurationError { reason: String },

    #[error("Unknown configuration key: {key}")]
    UnknownConfigKey { key: String },

    #[error("Home directory not found")]
    HomeDirectoryNotFound,

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Text encoding errors
    #[error("Invalid UTF-8 input: {reason}")]
    InvalidUtf8 { reason: String },
}

impl JotError {
    /// Create a new repository not found error
    pub fn repository_not_found(path: PathBuf) -> Self {
        Self::RepositoryNotFound { path }
    }

    /// Create a new invalid file path error
    pub fn invalid_file_path(path: impl Into<String>) -> Self {
        Self::InvalidFilePath { path: path.into() }
    }

    /// Create a new corrupt HEAD error
    pub fn corrupt_head(reason: impl Into<String>) -> Self {
        Self::CorruptHead {
            reason: reason.into(),
        }
    }

    /// Create a new object write failed error
    pub fn object_write_failed(oid: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ObjectWriteFailed {
            oid: oid.into(),
            reason: reason.into(),
        }
    }

    /// Create a new configuration error
    pub fn configuration_error(reason: impl Into<String>) -> Self {
        Self::ConfigurationError {
            reason: reason.into(),
        }
    }

    /// Create a new invalid UTF-8 error
    pub fn invalid_utf8(reason: impl Into<String>) -> Self {
        Self::InvalidUtf8 {
            reason: reason.into(),
        }
    }
}

/// Result type alias for Jot operations
pub type Result<T> = std::result::Result<T, JotError>;
