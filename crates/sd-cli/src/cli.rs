//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// sdgen - synthesize customers, products, and transactions as clean and raw CSV files
#[derive(Parser, Debug)]
#[command(name = "sdgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file (default: ./sampledata.yml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the clean and raw datasets
    Generate(GenerateArgs),

    /// Remove the clean and raw output directories
    Clean(CleanArgs),
}

/// Arguments for the generate command
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Number of customers (default 1000)
    #[arg(long)]
    pub customers: Option<usize>,

    /// Number of products (default 100)
    #[arg(long)]
    pub products: Option<usize>,

    /// Number of transactions (default 5000)
    #[arg(long)]
    pub transactions: Option<usize>,

    /// Directory for the clean tables
    #[arg(long)]
    pub clean_dir: Option<String>,

    /// Directory for the tables with quality issues
    #[arg(long)]
    pub raw_dir: Option<String>,

    /// Summary format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Summary output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// JSON summary
    Json,
}

/// Arguments for the clean command
#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Show what would be removed without removing it
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
