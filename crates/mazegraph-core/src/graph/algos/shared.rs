use crate::error::{GraphError, Result};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::Vertex;

/// Resolve the start vertex of a traversal.
///
/// A missing start vertex is rejected before any observer is notified.
pub fn resolve_start<V: Vertex, G: GraphProvider<V>>(provider: &G, start: &V) -> Result<usize> {
    provider
        .index_of(start)
        .ok_or_else(|| GraphError::unknown_vertex(start))
}

/// Resolve the end vertex of a traversal.
///
/// A missing end vertex is not an error: the search simply never reaches it.
pub fn resolve_end<V: Vertex, G: GraphProvider<V>>(provider: &G, end: &V) -> Option<usize> {
    let index = provider.index_of(end);
    if index.is_none() {
        tracing::debug!(end = ?end, "end vertex is not in the graph");
    }
    index
}
