//! CLI argument parsing for simple-linreg

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the regression summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "simple-linreg")]
#[command(version)]
#[command(about = "Fit a simple linear regression and print coefficient and model summaries", long_about = None)]
pub struct Cli {
    /// CSV file with two numeric columns (x,y); uses the built-in demo sample if omitted
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Comma-separated x values to predict (e.g., -p 700,850,1200)
    #[arg(
        short,
        long,
        value_name = "VALUES",
        default_value = "700,850,1200",
        allow_hyphen_values = true
    )]
    pub predict: String,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with fit configuration
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Decimals kept in metrics (overrides the config file)
    #[arg(long, value_name = "N")]
    pub precision: Option<u32>,

    /// Enable debug tracing output to stderr
    #[arg(long)]
    pub debug: bool,
}
