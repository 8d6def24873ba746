//! Jot CLI
//!
//! Command-line interface for the Jot version-control object store.

use anyhow::Result;
use clap::Parser;

use jot::cli::{commands, Cli, Commands};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse command line arguments
    let cli = Cli::parse();

    // Execute the command
    match cli.command {
        Commands::Init { path } => commands::init::execute(path),
        Commands::Commit { message, file } => commands::commit::execute(message, file),
        Commands::Config { key, value } => commands::config::execute(key, value),
    }
}
