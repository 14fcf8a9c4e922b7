//! CLI argument parsing for mazegraph
//!
//! Uses clap for argument parsing.
//! Supports global flags: --config, --format, --quiet, --verbose

pub mod commands;
pub mod parse;

use clap::Parser;
use std::path::PathBuf;

use mazegraph_core::format::OutputFormat;
pub use commands::{Commands, InfoArgs, RunArgs, SourceArgs, WeightArgs};
use parse::parse_format;

/// Mazegraph - weighted graph and maze traversal CLI
#[derive(Parser, Debug)]
#[command(name = "mazegraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (defaults to ./mazegraph.toml when present)
    #[arg(long, global = true, env = "MAZEGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log debug information to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, mazegraph_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
