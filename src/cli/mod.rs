//! CLI argument parsing for campus
//!
//! Global flags: --config, --format, --quiet, --verbose, --log-level,
//! --log-json, --empty

pub mod args;
pub mod format;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{CompareArgs, DivergenceArgs, RouteArgs};
pub use campus_core::format::OutputFormat;
use parse::parse_output_format;

/// Campus - BFS and Dijkstra routes over a campus map
#[derive(Parser, Debug)]
#[command(name = "campus")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: campus.toml in the current directory, if present)
    #[arg(long, global = true, env = "CAMPUS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format: human, json, records (overrides the config file)
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. trace, campus_core=debug)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Start from an empty map instead of the demonstration campus
    #[arg(long, global = true)]
    pub empty: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List locations in insertion order
    Locations,

    /// Find a route between two locations
    Route(RouteArgs),

    /// Run BFS and Dijkstra on the same pair and compare
    Compare(CompareArgs),

    /// Count pairs where BFS and Dijkstra disagree
    Divergence(DivergenceArgs),
}
