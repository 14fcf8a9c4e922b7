//! Loading the graph named by `--graph` or `--maze`

use std::fmt::Display;
use std::str::FromStr;
use std::time::Instant;

use serde::Serialize;

use crate::cli::SourceArgs;
use mazegraph_core::bail_usage;
use mazegraph_core::config::GraphDefaults;
use mazegraph_core::error::Result;
use mazegraph_core::graph::{GraphDocument, Vertex, WeightedGraph};
use mazegraph_core::maze::{maze_graph, Juncture, TextMaze};
use mazegraph_core::trace_time;

/// A vertex type the CLI can read from arguments and print back
pub trait CliVertex: Vertex + Display + Serialize + 'static {
    fn parse_arg(arg: &str) -> Result<Self>;
}

impl CliVertex for String {
    fn parse_arg(arg: &str) -> Result<Self> {
        Ok(arg.to_string())
    }
}

impl CliVertex for Juncture {
    fn parse_arg(arg: &str) -> Result<Self> {
        Juncture::from_str(arg)
    }
}

/// A graph loaded from either kind of source
pub enum LoadedGraph {
    Document(WeightedGraph<String>),
    Maze(WeightedGraph<Juncture>),
}

impl LoadedGraph {
    pub fn load(source: &SourceArgs, defaults: &GraphDefaults) -> Result<Self> {
        let start = Instant::now();
        let loaded = match (&source.graph, &source.maze) {
            (Some(path), None) => {
                LoadedGraph::Document(GraphDocument::load(path)?.into_graph(defaults)?)
            }
            (None, Some(path)) => LoadedGraph::Maze(maze_graph(&TextMaze::load(path)?)?),
            _ => bail_usage!("exactly one of --graph or --maze is required"),
        };
        trace_time!(start, "load_graph");
        Ok(loaded)
    }
}

/// Parse a pair of vertex arguments for the graph's vertex type
pub fn parse_pair<V: CliVertex>(first: &str, second: &str) -> Result<(V, V)> {
    Ok((V::parse_arg(first)?, V::parse_arg(second)?))
}
