//! Vertex set and directed weighted adjacency relation

use indexmap::IndexMap;

use crate::error::{GraphError, Result};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Vertex, Weight};

/// Insertion-ordered map from vertex to its outgoing edges.
///
/// Rejected mutations never leave partial writes behind: every check runs
/// before the map is touched.
#[derive(Debug, Clone)]
pub struct Adjacency<V: Vertex> {
    graph: IndexMap<V, IndexMap<V, Weight>>,
}

impl<V: Vertex> Default for Adjacency<V> {
    fn default() -> Self {
        Self {
            graph: IndexMap::new(),
        }
    }
}

impl<V: Vertex> Adjacency<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, vertex: V) -> Result<()> {
        if self.graph.contains_key(&vertex) {
            return Err(GraphError::duplicate_vertex(&vertex));
        }
        self.graph.insert(vertex, IndexMap::new());
        Ok(())
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.graph.contains_key(vertex)
    }

    pub fn add_edge(&mut self, from: &V, to: &V, weight: i64) -> Result<()> {
        if !self.graph.contains_key(from) {
            return Err(GraphError::unknown_vertex(from));
        }
        if !self.graph.contains_key(to) {
            return Err(GraphError::unknown_vertex(to));
        }
        let weight = Weight::try_from(weight)?;
        let edges = self
            .graph
            .get_mut(from)
            .ok_or_else(|| GraphError::unknown_vertex(from))?;
        edges.insert(to.clone(), weight);
        Ok(())
    }

    pub fn weight(&self, from: &V, to: &V) -> Result<Option<Weight>> {
        let edges = self
            .graph
            .get(from)
            .ok_or_else(|| GraphError::unknown_vertex(from))?;
        if !self.graph.contains_key(to) {
            return Err(GraphError::unknown_vertex(to));
        }
        Ok(edges.get(to).copied())
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.len()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.values().map(IndexMap::len).sum()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.graph.keys()
    }

    pub fn edges_from(&self, from: &V) -> Result<impl Iterator<Item = (&V, Weight)>> {
        let edges = self
            .graph
            .get(from)
            .ok_or_else(|| GraphError::unknown_vertex(from))?;
        Ok(edges.iter().map(|(to, weight)| (to, *weight)))
    }
}

impl<V: Vertex> GraphProvider<V> for Adjacency<V> {
    fn vertex_count(&self) -> usize {
        self.graph.len()
    }

    fn index_of(&self, vertex: &V) -> Option<usize> {
        self.graph.get_index_of(vertex)
    }

    fn vertex_at(&self, index: usize) -> &V {
        match self.graph.get_index(index) {
            Some((vertex, _)) => vertex,
            None => panic!(
                "vertex index {} out of range for graph of {} vertices",
                index,
                self.graph.len()
            ),
        }
    }

    fn neighbors(&self, index: usize) -> Vec<(usize, Weight)> {
        let Some((_, edges)) = self.graph.get_index(index) else {
            return Vec::new();
        };
        edges
            .iter()
            .filter_map(|(to, weight)| self.graph.get_index_of(to).map(|i| (i, *weight)))
            .collect()
    }
}
