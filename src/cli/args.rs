//! Command line argument parsing for the lexstat CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Lexstat - lexical statistics for text
#[derive(Parser, Debug, Clone)]
#[command(name = "lexstat")]
#[command(about = "Compute lexical statistics for a text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Lexstat Contributors")]
#[command(long_about = None)]
pub struct LexstatArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexstatArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze a text and report its lexical statistics
    Analyze(AnalyzeArgs),
}

/// Arguments for analyzing a text
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// The text to analyze; reads stdin when neither this nor --file is given
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text from a file instead of the command line
    #[arg(short = 'F', long, value_name = "FILE", conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
