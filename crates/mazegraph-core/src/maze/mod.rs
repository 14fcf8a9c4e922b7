//! Rectangular mazes as weighted graphs
//!
//! A maze is a grid of junctures, `(0, 0)` being the upper left corner.
//! Adjacent junctures that are not separated by a wall are joined by a pair
//! of directed edges whose weights come from the maze.

pub mod text;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::WeightedGraph;

pub use text::TextMaze;

/// A grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Juncture {
    pub x: usize,
    pub y: usize,
}

impl Juncture {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Juncture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Juncture {
    type Err = GraphError;

    /// Parse `"x,y"`
    fn from_str(s: &str) -> Result<Self> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| GraphError::invalid_value("juncture", s))?;
        let x = x
            .trim()
            .parse()
            .map_err(|_| GraphError::invalid_value("juncture", s))?;
        let y = y
            .trim()
            .parse()
            .map_err(|_| GraphError::invalid_value("juncture", s))?;
        Ok(Juncture { x, y })
    }
}

/// One of the four sides of a juncture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Above,
    Below,
    Left,
    Right,
}

impl Side {
    /// Sides in the order the graph builder examines them
    pub const ALL: [Side; 4] = [Side::Left, Side::Above, Side::Right, Side::Below];

    pub fn opposite(self) -> Side {
        match self {
            Side::Above => Side::Below,
            Side::Below => Side::Above,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// The juncture on this side of `from`, ignoring the maze bounds on the
    /// far side. `None` only when the step would leave the first row or column.
    pub fn step(self, from: Juncture) -> Option<Juncture> {
        match self {
            Side::Above => from.y.checked_sub(1).map(|y| Juncture::new(from.x, y)),
            Side::Below => Some(Juncture::new(from.x, from.y + 1)),
            Side::Left => from.x.checked_sub(1).map(|x| Juncture::new(x, from.y)),
            Side::Right => Some(Juncture::new(from.x + 1, from.y)),
        }
    }
}

/// Source of maze layout and movement costs
pub trait Maze {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Whether a wall blocks movement from `juncture` towards `side`
    fn is_wall(&self, juncture: Juncture, side: Side) -> bool;

    /// Cost of moving from `juncture` towards `side`
    fn weight(&self, juncture: Juncture, side: Side) -> i64;
}

/// Convert a maze into a graph.
///
/// Every juncture becomes a vertex, added column by column. For every open
/// side whose neighbouring juncture is already a vertex, two edges are added:
/// one into the neighbour and one back, each weighted by the maze.
pub fn maze_graph(maze: &impl Maze) -> Result<WeightedGraph<Juncture>> {
    let mut graph = WeightedGraph::new();

    for x in 0..maze.width() {
        for y in 0..maze.height() {
            let current = Juncture::new(x, y);
            graph.add_vertex(current)?;
            tracing::trace!(juncture = %current, "added vertex");

            for side in Side::ALL {
                if maze.is_wall(current, side) {
                    continue;
                }
                let Some(neighbor) = side.step(current) else {
                    continue;
                };
                if !graph.contains_vertex(&neighbor) {
                    continue;
                }
                graph.add_edge(&current, &neighbor, maze.weight(current, side))?;
                graph.add_edge(&neighbor, &current, maze.weight(neighbor, side.opposite()))?;
            }
        }
    }

    tracing::debug!(
        width = maze.width(),
        height = maze.height(),
        edges = graph.edge_count(),
        "maze converted to graph"
    );
    Ok(graph)
}
