//! Printing traversal notifications

use std::fmt::Display;

use mazegraph_core::format::{format_path, OutputFormat};
use mazegraph_core::graph::{Algorithm, Cost, GraphObserver};

/// Observer that prints each notification the moment it arrives.
///
/// Handles the line-oriented formats; JSON output is collected with a
/// `TraversalLog` and printed once the run is over.
#[derive(Debug)]
pub struct EventPrinter {
    format: OutputFormat,
    quiet: bool,
    search_over_seen: bool,
}

impl EventPrinter {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self {
            format,
            quiet,
            search_over_seen: false,
        }
    }

    pub fn search_over_seen(&self) -> bool {
        self.search_over_seen
    }

    fn begun(&self, algorithm: Algorithm) {
        match self.format {
            OutputFormat::Records => println!("B {}", algorithm),
            _ if self.quiet => {}
            _ => println!("{} begun", algorithm),
        }
    }
}

impl<V: Display> GraphObserver<V> for EventPrinter {
    fn bfs_begun(&mut self) {
        self.begun(Algorithm::Bfs);
    }

    fn dfs_begun(&mut self) {
        self.begun(Algorithm::Dfs);
    }

    fn dijkstra_begun(&mut self) {
        self.begun(Algorithm::Dijkstra);
    }

    fn visit(&mut self, vertex: &V) {
        match self.format {
            OutputFormat::Records => println!("V {}", vertex),
            _ if self.quiet => {}
            _ => println!("visit {}", vertex),
        }
    }

    fn vertex_finished(&mut self, vertex: &V, cost: Cost) {
        match self.format {
            OutputFormat::Records => println!("F {} {}", vertex, cost),
            _ if self.quiet => {}
            _ => println!("finished {} cost={}", vertex, cost),
        }
    }

    fn search_over(&mut self, path: Option<&[V]>) {
        self.search_over_seen = true;
        match (self.format, path) {
            (OutputFormat::Records, None) => println!("S"),
            (OutputFormat::Records, Some(path)) => {
                let mut line = String::from("S");
                for vertex in path {
                    line.push(' ');
                    line.push_str(&vertex.to_string());
                }
                println!("{}", line);
            }
            (_, None) => println!("search over"),
            (_, Some(path)) => println!("search over: {}", format_path(path)),
        }
    }
}
