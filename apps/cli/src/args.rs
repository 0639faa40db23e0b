//! # CLI Argument Definitions
//!
//! Every command reads JSON files and writes JSON to stdout. Logs go to stderr.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "bazaar")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Shipping configuration tool for the Bazaar back office")]
pub struct Cli {
    /// Settings file (`.toml`, `.json`, `.yaml`); `BAZAAR__*` variables override it
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Enumeration of available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the default configuration tree
    Default {},
    /// Turn stored rows into a configuration tree (no rows yields the default)
    Transform {
        #[arg(short, long)]
        rows: Option<PathBuf>,
    },
    /// Validate a configuration tree; exits with 1 when it is not publishable
    Validate {
        #[arg(short, long)]
        tree: PathBuf,
    },
    /// Turn a configuration tree into the rows it is stored as
    Flatten {
        #[arg(short, long)]
        tree: PathBuf,
    },
    /// Load a brand's rows through the store and report publishability
    Check {
        #[arg(short, long)]
        rows: Option<PathBuf>,
        #[arg(short, long, default_value = "local")]
        brand: String,
    },
    /// Save a configuration tree and print when it takes effect
    Publish {
        #[arg(short, long)]
        tree: PathBuf,
        #[arg(short, long, default_value = "local")]
        brand: String,
    },
}
