//! Command-Line Interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Replay Test Generator - Convert session recordings into Playwright tests
#[derive(Parser, Debug)]
#[command(name = "replay-testgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a recording into a generated test
    Convert {
        /// Input recording file (JSON event stream)
        input: PathBuf,

        /// Output directory for the generated test
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Test name (derived from the file name if not provided)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Print the conversion summary without writing any files
    Inspect {
        /// Input recording file
        input: PathBuf,
    },

    /// Initialize configuration and output directories
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// View or reset configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Derive a test name from a recording path: the file stem, or a fixed
/// fallback for paths without one.
pub fn test_name_from_path(path: &std::path::Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "recording".to_string())
}
