use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// Anything usable as a graph vertex.
///
/// Two vertices that compare equal are the same node. Mutating a vertex in a
/// way that changes its hash after insertion is a caller bug the graph does
/// not detect.
pub trait Vertex: Eq + Hash + Clone + fmt::Debug {}

impl<T: Eq + Hash + Clone + fmt::Debug> Vertex for T {}

/// Non-negative weight of a single directed edge
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Weight(u32);

impl Weight {
    pub const ZERO: Weight = Weight(0);

    pub fn new(weight: u32) -> Self {
        Weight(weight)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for Weight {
    fn from(weight: u32) -> Self {
        Weight(weight)
    }
}

impl TryFrom<i64> for Weight {
    type Error = GraphError;

    fn try_from(weight: i64) -> Result<Self> {
        u32::try_from(weight)
            .map(Weight)
            .map_err(|_| GraphError::InvalidWeight { weight })
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Accumulated cost of a path, i.e. a sum of edge weights
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Cost(u64);

impl Cost {
    pub const ZERO: Cost = Cost(0);

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for Cost {
    fn from(cost: u64) -> Self {
        Cost(cost)
    }
}

impl std::ops::Add<Weight> for Cost {
    type Output = Self;

    fn add(self, weight: Weight) -> Self {
        Cost(self.0 + u64::from(weight.0))
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Traversal algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Breadth-first search, stops once the end vertex is visited
    Bfs,
    /// Depth-first search, stops once the end vertex is visited
    Dfs,
    /// Dijkstra shortest path, always finishes every reachable vertex
    #[default]
    Dijkstra,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
        }
    }
}

impl FromStr for Algorithm {
    type Err = GraphError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            other => Err(GraphError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
