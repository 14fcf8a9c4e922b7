use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::Result;
use crate::graph::algos::shared::{resolve_end, resolve_start};
use crate::graph::observer::ObserverList;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Cost, Vertex};

/// Wrapper for BinaryHeap to use as min-heap.
///
/// Ordered by accumulated cost, then by vertex index so that equal-cost
/// candidates are finished in vertex insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HeapEntry {
    pub accumulated_cost: Cost,
    pub index: usize,
}

/// State tracked during Dijkstra traversal
struct DijkstraState {
    costs: Vec<Option<Cost>>,
    predecessors: Vec<Option<usize>>,
    finished: Vec<bool>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
}

impl DijkstraState {
    fn new(vertex_count: usize, start: usize) -> Self {
        let mut state = Self {
            costs: vec![None; vertex_count],
            predecessors: vec![None; vertex_count],
            finished: vec![false; vertex_count],
            heap: BinaryHeap::new(),
        };
        state.costs[start] = Some(Cost::ZERO);
        state.heap.push(Reverse(HeapEntry {
            accumulated_cost: Cost::ZERO,
            index: start,
        }));
        state
    }

    /// Pop the cheapest unfinished vertex.
    ///
    /// Costs only ever decrease, so the first entry popped for a vertex
    /// carries its final cost and any later entry for it is stale.
    fn pop_unfinished(&mut self) -> Option<HeapEntry> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            if !self.finished[entry.index] {
                return Some(entry);
            }
        }
        None
    }

    /// Relax the edge `from -> to`. Equal-cost alternatives keep the existing
    /// predecessor.
    fn relax(&mut self, from: usize, to: usize, candidate: Cost) {
        if self.finished[to] {
            return;
        }
        if self.costs[to].is_none_or(|current| candidate < current) {
            self.costs[to] = Some(candidate);
            self.predecessors[to] = Some(from);
            self.heap.push(Reverse(HeapEntry {
                accumulated_cost: candidate,
                index: to,
            }));
        }
    }
}

/// Walk predecessors back from `end` and return the path in start-to-end
/// order, or an empty path when `end` is absent or unreachable.
fn reconstruct_path<V: Vertex, G: GraphProvider<V>>(
    provider: &G,
    predecessors: &[Option<usize>],
    start: usize,
    end: Option<usize>,
) -> Vec<V> {
    let Some(end) = end else {
        return Vec::new();
    };

    let mut indices = vec![end];
    let mut current = end;
    while let Some(pred) = predecessors[current] {
        indices.push(pred);
        current = pred;
    }

    if current != start {
        return Vec::new();
    }

    indices
        .iter()
        .rev()
        .map(|&index| provider.vertex_at(index).clone())
        .collect()
}

/// Dijkstra single-source shortest path from `start`.
///
/// Never stops early at `end`: every vertex reachable from `start` is
/// finished, in non-decreasing cost order, before the least-cost path to
/// `end` is reported. Vertices that cannot be reached have no finite cost
/// and are never finished.
#[tracing::instrument(skip(provider, observers, start, end), fields(start = ?start, end = ?end, vertices = provider.vertex_count()))]
pub fn dijkstra_traverse<V: Vertex, G: GraphProvider<V>>(
    provider: &G,
    observers: &mut ObserverList<V>,
    start: &V,
    end: &V,
) -> Result<()> {
    let start_index = resolve_start(provider, start)?;
    let end_index = resolve_end(provider, end);

    observers.notify(|o| o.dijkstra_begun());

    let mut state = DijkstraState::new(provider.vertex_count(), start_index);
    let mut finished_count = 0usize;

    while let Some(HeapEntry {
        accumulated_cost,
        index,
    }) = state.pop_unfinished()
    {
        state.finished[index] = true;
        finished_count += 1;

        let vertex = provider.vertex_at(index);
        observers.notify(|o| o.vertex_finished(vertex, accumulated_cost));

        for (neighbor, weight) in provider.neighbors(index) {
            state.relax(index, neighbor, accumulated_cost + weight);
        }
    }

    let path = reconstruct_path(provider, &state.predecessors, start_index, end_index);
    tracing::debug!(
        finished = finished_count,
        unreachable = provider.vertex_count() - finished_count,
        path_len = path.len(),
        "all reachable vertices finished"
    );
    observers.notify(|o| o.search_over(Some(path.as_slice())));

    Ok(())
}
