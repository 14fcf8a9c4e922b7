//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Breadth-first search, stops at the end vertex
//! - `dfs`: Depth-first search, stops at the end vertex
//! - `dijkstra`: Single-source shortest path over every reachable vertex
//! - `shared`: Common utilities used by multiple algorithms

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod shared;

#[cfg(test)]
mod test_support;

pub use bfs::bfs_traverse;
pub use dfs::dfs_traverse;
pub use dijkstra::dijkstra_traverse;
