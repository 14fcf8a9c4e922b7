//! Weighted directed graph and its traversal algorithms
//!
//! Provides:
//! - `WeightedGraph`: the graph store, generic over the vertex type
//! - BFS, DFS and Dijkstra engines reporting progress to observers
//! - `GraphProvider`: the read-only view the engines traverse
//! - `GraphDocument`: graph description files (TOML or JSON)

mod adjacency;
pub mod algos;
pub mod document;
pub mod observer;
pub mod store;
pub mod traversal;
pub mod types;

pub use adjacency::Adjacency;
pub use document::{EdgeSpec, GraphDocument};
pub use observer::{GraphObserver, ObserverList, TraversalEvent, TraversalLog};
pub use store::WeightedGraph;
pub use traversal::GraphProvider;
pub use types::{Algorithm, Cost, Vertex, Weight};
