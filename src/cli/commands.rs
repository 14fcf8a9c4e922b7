//! Main CLI commands enum

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::parse::parse_algorithm;
use mazegraph_core::graph::Algorithm;

/// Top-level mazegraph commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Traverse a graph from a start vertex towards an end vertex
    Run(RunArgs),

    /// Print the weight of a single directed edge
    Weight(WeightArgs),

    /// Print vertex and edge counts
    Info(InfoArgs),
}

/// Where the graph comes from. Exactly one source is required.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct SourceArgs {
    /// Graph description file (.toml or .json)
    #[arg(long, short = 'g')]
    pub graph: Option<PathBuf>,

    /// ASCII maze file; vertices are written as `x,y`
    #[arg(long, short = 'm')]
    pub maze: Option<PathBuf>,
}

/// Arguments for the run command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Vertex the traversal starts from
    pub start: String,

    /// Vertex the traversal is looking for
    pub end: String,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Traversal algorithm (bfs, dfs, dijkstra); defaults to the configured one
    #[arg(long, short, value_parser = parse_algorithm)]
    pub algorithm: Option<Algorithm>,
}

/// Arguments for the weight command.
#[derive(Args, Debug)]
pub struct WeightArgs {
    pub from: String,

    pub to: String,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for the info command.
#[derive(Args, Debug)]
pub struct InfoArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}
