//! Fixtures shared by the traversal engine tests

use proptest::collection::vec;
use proptest::prelude::{Just, Strategy};

use crate::graph::observer::{ObserverList, TraversalLog};
use crate::graph::Adjacency;
use std::cell::RefCell;
use std::rc::Rc;

/// Build an adjacency from vertices and `(from, to, weight)` triples
pub fn build<V: crate::graph::Vertex>(vertices: &[V], edges: &[(V, V, i64)]) -> Adjacency<V> {
    let mut adjacency = Adjacency::new();
    for vertex in vertices {
        adjacency.add_vertex(vertex.clone()).unwrap();
    }
    for (from, to, weight) in edges {
        adjacency.add_edge(from, to, *weight).unwrap();
    }
    adjacency
}

/// A -> B (1), A -> C (4), B -> C (2), B -> D (5), C -> D (1)
pub fn diamond() -> Adjacency<&'static str> {
    build(
        &["A", "B", "C", "D"],
        &[
            ("A", "B", 1),
            ("A", "C", 4),
            ("B", "C", 2),
            ("B", "D", 5),
            ("C", "D", 1),
        ],
    )
}

/// Observer list holding a single log, plus the handle to read it back
pub fn logged<V: Clone + 'static>() -> (ObserverList<V>, Rc<RefCell<TraversalLog<V>>>) {
    let log = TraversalLog::shared();
    let mut observers = ObserverList::new();
    observers.register(Box::new(Rc::clone(&log)));
    (observers, log)
}

/// Random graphs over vertices `0..n`, with `n` in `1..max_vertices`
pub fn arbitrary_graph(
    max_vertices: usize,
    max_edges: usize,
) -> impl Strategy<Value = (usize, Vec<(usize, usize, i64)>)> {
    (1..max_vertices).prop_flat_map(move |n| {
        (Just(n), vec((0..n, 0..n, 0i64..20), 0..max_edges))
    })
}

pub fn build_indexed(n: usize, edges: &[(usize, usize, i64)]) -> Adjacency<usize> {
    let vertices: Vec<usize> = (0..n).collect();
    build(&vertices, edges)
}

/// Hop distance from `start` to every vertex, by repeated relaxation
pub fn hop_distances(n: usize, edges: &[(usize, usize, i64)], start: usize) -> Vec<Option<usize>> {
    let mut distances = vec![None; n];
    distances[start] = Some(0);
    for _ in 0..n {
        for &(from, to, _) in edges {
            if let Some(d) = distances[from] {
                if distances[to].is_none_or(|current| d + 1 < current) {
                    distances[to] = Some(d + 1);
                }
            }
        }
    }
    distances
}
