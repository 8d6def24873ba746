//! Command-line interface for Jot

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

/// Jot - minimal content-addressable version control
#[derive(Parser)]
#[command(
    name = "jot",
    version,
    about = "A minimal content-addressable version-control object store",
    long_about = "Jot snapshots a working directory into an immutable, content-addressed graph of blob, tree and commit objects."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an empty repository or reinitialize an existing one
    Init {
        /// Directory to initialize (default: current directory)
        path: Option<PathBuf>,
    },

    /// Record a snapshot of the workspace
    Commit {
        /// Commit message (default: read from standard input)
        #[arg(short, long)]
        message: Option<String>,

        /// Read the commit message from a file
        #[arg(short = 'F', long, conflicts_with = "message")]
        file: Option<PathBuf>,
    },

    /// Get or set configuration values (user.name, user.email)
    Config {
        /// Configuration key
        key: String,

        /// Value to set; omit to print the current value
        value: Option<String>,
    },
}
