use crate::error::Result;
use crate::graph::algos::shared::{resolve_end, resolve_start};
use crate::graph::observer::ObserverList;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::Vertex;

/// State shared by every step of one depth-first search
struct DfsState<'a, V, G> {
    provider: &'a G,
    observers: &'a mut ObserverList<V>,
    end_index: Option<usize>,
    visited: Vec<bool>,
    /// One pending-neighbour iterator per vertex on the current path
    stack: Vec<std::vec::IntoIter<usize>>,
}

impl<V: Vertex, G: GraphProvider<V>> DfsState<'_, V, G> {
    /// Visit `index`; returns true when it is the end vertex.
    fn enter(&mut self, index: usize) -> bool {
        let provider = self.provider;
        let vertex = provider.vertex_at(index);
        self.observers.notify(|o| o.visit(vertex));

        if self.end_index == Some(index) {
            return true;
        }

        self.visited[index] = true;
        let neighbors: Vec<usize> = provider
            .neighbors(index)
            .into_iter()
            .map(|(neighbor, _)| neighbor)
            .collect();
        self.stack.push(neighbors.into_iter());
        false
    }

    /// Pre-order search from `start`; returns true once the end vertex is found.
    ///
    /// Equivalent to the recursive formulation: a frame's next neighbour is
    /// only examined after the subtree of the previous one is exhausted, and
    /// finding the end vertex abandons every frame at once.
    fn search(&mut self, start: usize) -> bool {
        if self.enter(start) {
            return true;
        }

        while let Some(pending) = self.stack.last_mut() {
            match pending.next() {
                Some(next) => {
                    if !self.visited[next] && self.enter(next) {
                        return true;
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }

        false
    }
}

/// Depth-first search from `start`, stopping as soon as `end` is visited.
///
/// Uses an explicit stack so deep graphs cannot overflow the call stack.
/// When the search exhausts without reaching `end`, no search-over
/// notification is sent.
#[tracing::instrument(skip(provider, observers, start, end), fields(start = ?start, end = ?end, vertices = provider.vertex_count()))]
pub fn dfs_traverse<V: Vertex, G: GraphProvider<V>>(
    provider: &G,
    observers: &mut ObserverList<V>,
    start: &V,
    end: &V,
) -> Result<()> {
    let start_index = resolve_start(provider, start)?;
    let end_index = resolve_end(provider, end);

    observers.notify(|o| o.dfs_begun());

    let mut state = DfsState {
        provider,
        observers,
        end_index,
        visited: vec![false; provider.vertex_count()],
        stack: Vec::new(),
    };

    if state.search(start_index) {
        tracing::debug!(depth = state.stack.len(), "end vertex reached");
        state.observers.notify(|o| o.search_over(None));
    } else {
        tracing::debug!("search exhausted without reaching end vertex");
    }

    Ok(())
}
