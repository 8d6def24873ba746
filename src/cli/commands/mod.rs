//! Command implementations for the Jot CLI

pub mod commit;
pub mod config;
pub mod init;

use crate::repository::JOT_DIR;
use anyhow::Result;
use std::path::PathBuf;

/// Walk up from the current directory to find the repository root
pub fn find_repository_root() -> Result<Option<PathBuf>> {
    let mut current = std::env::current_dir()?;
    loop {
        if current.join(JOT_DIR).is_dir() {
            return Ok(Some(current));
        }
        if !current.pop() {
            return Ok(None);
        }
    }
}
