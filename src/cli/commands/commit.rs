//! Commit command implementation

use crate::cli::commands::find_repository_root;
use crate::config::{AuthorIdentity, GlobalConfig};
use crate::core::error::JotError;
use crate::core::object::Author;
use crate::repository::Repository;
use anyhow::Result;
use colored::Colorize;
use std::io::Read;
use std::path::PathBuf;

/// Execute the commit command
pub fn execute(message: Option<String>, file: Option<PathBuf>) -> Result<()> {
    let repo_root = find_repository_root()?
        .ok_or_else(|| anyhow::anyhow!("Not in a repository (no .jot directory found)"))?;
    let repo = Repository::open(&repo_root)?;

    let message = read_message(message, file)?;

    let config = GlobalConfig::load()?;
    let identity = AuthorIdentity::resolve(
        &config,
        std::env::var("JOT_AUTHOR_NAME").ok(),
        std::env::var("JOT_AUTHOR_EMAIL").ok(),
    );
    let author = Author::new(
        identity.name,
        identity.email,
        chrono::Local::now().fixed_offset(),
    );

    let summary = repo.commit(author, &message)?;

    let prefix = if summary.is_root {
        format!("(root-commit) {}", summary.oid.to_hex())
    } else {
        summary.oid.to_hex()
    };
    println!("[{}] {}", prefix.bright_cyan(), summary.title);
    Ok(())
}

/// Resolve the commit message: `-m`, `--file`, or standard input to EOF
fn read_message(message: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(message) = message {
        return Ok(message);
    }
    let bytes = match file {
        Some(path) => std::fs::read(path)?,
        None => {
            let mut bytes = Vec::new();
            std::io::stdin().read_to_end(&mut bytes)?;
            bytes
        }
    };
    let message = String::from_utf8(bytes)
        .map_err(|e| JotError::invalid_utf8(format!("commit message: {e}")))?;
    Ok(message)
}
