use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "review-guard")]
#[command(author, version, about = "Convention checks for JS/TS codebases")]
#[command(long_about = "Scans JavaScript/TypeScript sources with line-oriented \
    convention rules and reports findings per file.\n\n\
    Exit codes:\n  \
    0 - No findings\n  \
    1 - Findings reported\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check files against the convention rules
    Check(CheckArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Paths to check (files or directories)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maximum lines per file (overrides config)
    #[arg(long)]
    pub max_file_lines: Option<usize>,

    /// Maximum lines per function (overrides config)
    #[arg(long)]
    pub max_function_lines: Option<usize>,

    /// Maximum lines for a component's returned JSX (overrides config)
    #[arg(long)]
    pub max_jsx_lines: Option<usize>,

    /// Maximum useState declarations per component (overrides config)
    #[arg(long)]
    pub max_states: Option<usize>,

    /// Maximum parameters per function (overrides config)
    #[arg(long)]
    pub max_params: Option<usize>,

    /// File extensions to check (comma-separated, e.g., ts,tsx,js)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report findings but exit 0
    #[arg(long)]
    pub warn_only: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".review-guard.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
