//! Initialize command implementation

use crate::repository::Repository;
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

/// Execute the init command
pub fn execute(path: Option<PathBuf>) -> Result<()> {
    let root = match path {
        Some(path) => {
            std::fs::create_dir_all(&path)?;
            path.canonicalize()?
        }
        None => std::env::current_dir()?,
    };

    let repo = Repository::init(&root)?;
    println!(
        "{} Initialized empty Jot repository in {}",
        "✓".green(),
        repo.jot_path().display()
    );
    Ok(())
}
