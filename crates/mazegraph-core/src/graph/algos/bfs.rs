use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::algos::shared::{resolve_end, resolve_start};
use crate::graph::observer::ObserverList;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::Vertex;

/// Breadth-first search from `start`, stopping as soon as `end` is visited.
///
/// The queue may hold the same vertex more than once when it has several
/// incoming edges, so the visited check happens on dequeue. Neighbours are
/// enqueued in adjacency iteration order. When the queue runs dry without
/// reaching `end`, no search-over notification is sent.
#[tracing::instrument(skip(provider, observers, start, end), fields(start = ?start, end = ?end, vertices = provider.vertex_count()))]
pub fn bfs_traverse<V: Vertex, G: GraphProvider<V>>(
    provider: &G,
    observers: &mut ObserverList<V>,
    start: &V,
    end: &V,
) -> Result<()> {
    let start_index = resolve_start(provider, start)?;
    let end_index = resolve_end(provider, end);

    observers.notify(|o| o.bfs_begun());

    let mut visited = vec![false; provider.vertex_count()];
    let mut visit_count = 0usize;
    let mut queue = VecDeque::from([start_index]);

    while let Some(current) = queue.pop_front() {
        if visited[current] {
            continue;
        }

        let vertex = provider.vertex_at(current);
        observers.notify(|o| o.visit(vertex));
        visited[current] = true;
        visit_count += 1;

        for (neighbor, _) in provider.neighbors(current) {
            if !visited[neighbor] {
                queue.push_back(neighbor);
            }
        }

        if end_index == Some(current) {
            tracing::debug!(visited = visit_count, "end vertex reached");
            observers.notify(|o| o.search_over(None));
            return Ok(());
        }
    }

    tracing::debug!(
        visited = visit_count,
        "queue exhausted without reaching end vertex"
    );
    Ok(())
}
