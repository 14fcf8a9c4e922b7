use crate::graph::types::Weight;

/// Read-only, index-based view of a graph consumed by the traversal engines.
///
/// Vertices are addressed by a dense index in `0..vertex_count()`. Indices are
/// stable for the lifetime of the view and follow vertex insertion order,
/// which is also the tie-break order for Dijkstra's minimum selection.
pub trait GraphProvider<V> {
    fn vertex_count(&self) -> usize;

    fn index_of(&self, vertex: &V) -> Option<usize>;

    /// Vertex stored at `index`.
    ///
    /// Panics if `index` is out of range, like slice indexing.
    fn vertex_at(&self, index: usize) -> &V;

    /// Outgoing edges of the vertex at `index`, in adjacency iteration order.
    fn neighbors(&self, index: usize) -> Vec<(usize, Weight)>;
}
