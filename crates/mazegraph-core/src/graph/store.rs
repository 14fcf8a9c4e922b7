//! The graph store: vertices, directed weighted edges and registered observers

use crate::error::Result;
use crate::graph::adjacency::Adjacency;
use crate::graph::algos::{bfs_traverse, dfs_traverse, dijkstra_traverse};
use crate::graph::observer::{GraphObserver, ObserverList};
use crate::graph::types::{Algorithm, Vertex, Weight};

/// A general directed graph with non-negative integer edge weights.
///
/// The graph never stores duplicate vertices, and every edge endpoint is a
/// vertex of the graph. Iteration follows insertion order, which makes
/// every traversal reproducible.
///
/// Traversals borrow the graph mutably only to reach the observer list;
/// the vertex and edge sets are never modified by a traversal.
pub struct WeightedGraph<V: Vertex> {
    adjacency: Adjacency<V>,
    observers: ObserverList<V>,
}

impl<V: Vertex> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self {
            adjacency: Adjacency::new(),
            observers: ObserverList::new(),
        }
    }
}

impl<V: Vertex> std::fmt::Debug for WeightedGraph<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeightedGraph")
            .field("adjacency", &self.adjacency)
            .field("observers", &self.observers)
            .finish()
    }
}

impl<V: Vertex> WeightedGraph<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer to be notified by every later traversal.
    ///
    /// Observers are notified in registration order and cannot be removed.
    pub fn register_observer(&mut self, observer: Box<dyn GraphObserver<V>>) {
        self.observers.register(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Add a vertex with no outgoing edges.
    ///
    /// # Errors
    ///
    /// `DuplicateVertex` if the vertex is already present.
    pub fn add_vertex(&mut self, vertex: V) -> Result<()> {
        self.adjacency.add_vertex(vertex)
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_vertex(vertex)
    }

    /// Add or overwrite the directed edge `from -> to`.
    ///
    /// # Errors
    ///
    /// `UnknownVertex` if either endpoint is missing (`from` is checked
    /// first), then `InvalidWeight` if the weight is negative.
    pub fn add_edge(&mut self, from: &V, to: &V, weight: i64) -> Result<()> {
        self.adjacency.add_edge(from, to, weight)
    }

    /// Weight of the edge `from -> to`, or `None` when there is no such edge.
    ///
    /// # Errors
    ///
    /// `UnknownVertex` if either vertex is missing, even though the lookup
    /// itself only needs `from`.
    pub fn weight(&self, from: &V, to: &V) -> Result<Option<Weight>> {
        self.adjacency.weight(from, to)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.vertices()
    }

    /// Outgoing edges of `from`, in adjacency iteration order
    pub fn neighbors(&self, from: &V) -> Result<impl Iterator<Item = (&V, Weight)>> {
        self.adjacency.edges_from(from)
    }

    /// Breadth-first search from `start` until `end` is visited.
    ///
    /// # Errors
    ///
    /// `UnknownVertex` if `start` is not in the graph.
    pub fn run_bfs(&mut self, start: &V, end: &V) -> Result<()> {
        bfs_traverse(&self.adjacency, &mut self.observers, start, end)
    }

    /// Depth-first search from `start` until `end` is visited.
    ///
    /// # Errors
    ///
    /// `UnknownVertex` if `start` is not in the graph.
    pub fn run_dfs(&mut self, start: &V, end: &V) -> Result<()> {
        dfs_traverse(&self.adjacency, &mut self.observers, start, end)
    }

    /// Dijkstra's algorithm from `start`, reporting the least-cost path to `end`.
    ///
    /// # Errors
    ///
    /// `UnknownVertex` if `start` is not in the graph.
    pub fn run_dijkstra(&mut self, start: &V, end: &V) -> Result<()> {
        dijkstra_traverse(&self.adjacency, &mut self.observers, start, end)
    }

    /// Run the selected algorithm
    pub fn run(&mut self, algorithm: Algorithm, start: &V, end: &V) -> Result<()> {
        match algorithm {
            Algorithm::Bfs => self.run_bfs(start, end),
            Algorithm::Dfs => self.run_dfs(start, end),
            Algorithm::Dijkstra => self.run_dijkstra(start, end),
        }
    }
}
