//! Observer protocol for traversal progress
//!
//! Observers are notified synchronously, on the traversing thread, in
//! registration order. The listener list is never mutated while a traversal
//! is running.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

use crate::graph::types::{Algorithm, Cost};

/// Listener for traversal progress. Every method defaults to a no-op.
pub trait GraphObserver<V> {
    /// Called once before a breadth-first search visits anything
    fn bfs_begun(&mut self) {}

    /// Called once before a depth-first search visits anything
    fn dfs_begun(&mut self) {}

    /// Called once before Dijkstra finishes anything
    fn dijkstra_begun(&mut self) {}

    /// Called once per vertex visited by BFS or DFS
    fn visit(&mut self, _vertex: &V) {}

    /// Called once per vertex Dijkstra moves into its finished set, with the
    /// optimal cost from the start vertex
    fn vertex_finished(&mut self, _vertex: &V, _cost: Cost) {}

    /// Called once when a search completes.
    ///
    /// BFS and DFS pass `None`, and only call this when the end vertex was
    /// reached. Dijkstra always calls it with the least-cost path from start
    /// to end, which is empty when the end vertex is unreachable.
    fn search_over(&mut self, _path: Option<&[V]>) {}
}

/// Lets a caller keep a handle on an observer after registering it.
impl<V, O: GraphObserver<V> + ?Sized> GraphObserver<V> for Rc<RefCell<O>> {
    fn bfs_begun(&mut self) {
        self.borrow_mut().bfs_begun();
    }

    fn dfs_begun(&mut self) {
        self.borrow_mut().dfs_begun();
    }

    fn dijkstra_begun(&mut self) {
        self.borrow_mut().dijkstra_begun();
    }

    fn visit(&mut self, vertex: &V) {
        self.borrow_mut().visit(vertex);
    }

    fn vertex_finished(&mut self, vertex: &V, cost: Cost) {
        self.borrow_mut().vertex_finished(vertex, cost);
    }

    fn search_over(&mut self, path: Option<&[V]>) {
        self.borrow_mut().search_over(path);
    }
}

/// Ordered list of registered observers
pub struct ObserverList<V> {
    observers: Vec<Box<dyn GraphObserver<V>>>,
}

impl<V> Default for ObserverList<V> {
    fn default() -> Self {
        Self {
            observers: Vec::new(),
        }
    }
}

impl<V> ObserverList<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an observer. No deduplication; observers cannot be removed.
    pub fn register(&mut self, observer: Box<dyn GraphObserver<V>>) {
        self.observers.push(observer);
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Invoke `f` on every observer in registration order
    pub fn notify(&mut self, mut f: impl FnMut(&mut dyn GraphObserver<V>)) {
        for observer in &mut self.observers {
            f(observer.as_mut());
        }
    }
}

impl<V> std::fmt::Debug for ObserverList<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverList")
            .field("len", &self.observers.len())
            .finish()
    }
}

/// A single notification, as recorded by [`TraversalLog`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraversalEvent<V> {
    Begun { algorithm: Algorithm },
    Visit { vertex: V },
    Finished { vertex: V, cost: Cost },
    SearchOver { path: Option<Vec<V>> },
}

/// Observer that records every notification it receives
#[derive(Debug, Clone)]
pub struct TraversalLog<V> {
    events: Vec<TraversalEvent<V>>,
}

impl<V> Default for TraversalLog<V> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<V: Clone> TraversalLog<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// New log wrapped for registration while keeping a handle
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }

    pub fn events(&self) -> &[TraversalEvent<V>] {
        &self.events
    }

    pub fn into_events(self) -> Vec<TraversalEvent<V>> {
        self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Vertices in visit order
    pub fn visited(&self) -> Vec<V> {
        self.events
            .iter()
            .filter_map(|event| match event {
                TraversalEvent::Visit { vertex } => Some(vertex.clone()),
                _ => None,
            })
            .collect()
    }

    /// Vertices and costs in finish order
    pub fn finished(&self) -> Vec<(V, Cost)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                TraversalEvent::Finished { vertex, cost } => Some((vertex.clone(), *cost)),
                _ => None,
            })
            .collect()
    }

    pub fn search_over_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, TraversalEvent::SearchOver { .. }))
            .count()
    }

    /// Path carried by the most recent search-over notification, if any
    pub fn path(&self) -> Option<Vec<V>> {
        self.events
            .iter()
            .rev()
            .find_map(|event| match event {
                TraversalEvent::SearchOver { path } => Some(path.clone()),
                _ => None,
            })
            .flatten()
    }
}

impl<V: Clone> GraphObserver<V> for TraversalLog<V> {
    fn bfs_begun(&mut self) {
        self.events.push(TraversalEvent::Begun {
            algorithm: Algorithm::Bfs,
        });
    }

    fn dfs_begun(&mut self) {
        self.events.push(TraversalEvent::Begun {
            algorithm: Algorithm::Dfs,
        });
    }

    fn dijkstra_begun(&mut self) {
        self.events.push(TraversalEvent::Begun {
            algorithm: Algorithm::Dijkstra,
        });
    }

    fn visit(&mut self, vertex: &V) {
        self.events.push(TraversalEvent::Visit {
            vertex: vertex.clone(),
        });
    }

    fn vertex_finished(&mut self, vertex: &V, cost: Cost) {
        self.events.push(TraversalEvent::Finished {
            vertex: vertex.clone(),
            cost,
        });
    }

    fn search_over(&mut self, path: Option<&[V]>) {
        self.events.push(TraversalEvent::SearchOver {
            path: path.map(<[V]>::to_vec),
        });
    }
}
