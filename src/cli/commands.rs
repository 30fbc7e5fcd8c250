//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Extract on-call incident data as Singer messages
#[derive(Parser, Debug)]
#[command(name = "tap-oncall")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Output the catalog of available streams and exit
    Discover,

    /// Extract records for every enabled stream
    Sync {
        /// Catalog manifest filtering which streams and fields are synced
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}
