//! Command-line interface, parsed with clap.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Lipucook - recipe recommendation backend
#[derive(Parser)]
#[command(name = "lipucook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server (default)
    #[command(alias = "web")]
    Serve,

    /// Load the bundled datasets into empty tables
    Seed {
        /// Directory holding the dataset JSON files
        #[arg(long)]
        dataset_dir: Option<PathBuf>,

        /// Rows committed per transaction
        #[arg(long)]
        batch_size: Option<usize>,
    },

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

pub use commands::*;
