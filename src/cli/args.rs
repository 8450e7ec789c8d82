//! CLI argument definitions using clap
//!
//! Commands:
//! - shelfdb start --config <path>
//! - shelfdb list --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// shelfdb - a durable book catalog
#[derive(Parser, Debug)]
#[command(name = "shelfdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the catalog and serve JSON requests from stdin, one per line
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./shelfdb.json")]
        config: PathBuf,
    },

    /// Print every live record as JSON and exit
    List {
        /// Path to configuration file
        #[arg(long, default_value = "./shelfdb.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
