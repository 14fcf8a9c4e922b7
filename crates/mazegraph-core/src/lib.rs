//! Mazegraph Core Library
//!
//! Weighted directed graphs with observable BFS, DFS and Dijkstra traversals,
//! plus an adapter that turns rectangular mazes into graphs.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod maze;
