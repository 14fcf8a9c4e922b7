//! ASCII maze files
//!
//! A maze of `w` by `h` cells is drawn on `2h + 1` lines of `2w + 1`
//! columns. The cell `(x, y)` sits at line `2y + 1`, column `2x + 1`:
//!
//! ```text
//! +-+-+-+
//! |1 2|3|
//! + +-+ +
//! |4 5 6|
//! +-+-+-+
//! ```
//!
//! A cell is a digit, its entry cost, or a space or `.` for cost 1. A `|`
//! right of a cell walls it off from its right neighbour, a `-` below a cell
//! walls it off from the cell underneath. Inner corner columns are ignored.
//! The outer border is always a wall and may only be drawn with `+`, `-`,
//! `|` or spaces. Lines shorter than the first are padded with spaces.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::bail_maze;
use crate::error::{GraphError, Result};
use crate::maze::{Juncture, Maze, Side};

const DEFAULT_COST: u32 = 1;

/// A maze parsed from its ASCII drawing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMaze {
    width: usize,
    height: usize,
    /// Entry cost per cell, row-major
    costs: Vec<u32>,
    /// Wall between `(x, y)` and `(x + 1, y)`, row-major
    right_walls: Vec<bool>,
    /// Wall between `(x, y)` and `(x, y + 1)`, row-major
    below_walls: Vec<bool>,
}

impl TextMaze {
    /// Parse a maze drawing.
    ///
    /// Trailing blank lines are ignored. Errors carry the 1-based line number
    /// of the offending line.
    pub fn parse(input: &str) -> Result<Self> {
        let mut lines: Vec<&str> = input.lines().map(str::trim_end).collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }

        let Some(border) = lines.first() else {
            bail_maze!(1, "maze is empty");
        };
        let columns = border.chars().count();
        if columns < 3 || columns % 2 == 0 {
            bail_maze!(
                1,
                format!("expected an odd width of at least 3 columns, found {columns}")
            );
        }
        if lines.len() < 3 || lines.len() % 2 == 0 {
            bail_maze!(
                lines.len(),
                format!(
                    "expected an odd number of at least 3 lines, found {}",
                    lines.len()
                )
            );
        }

        let width = (columns - 1) / 2;
        let height = (lines.len() - 1) / 2;
        let mut maze = TextMaze {
            width,
            height,
            costs: vec![DEFAULT_COST; width * height],
            right_walls: vec![false; width * height],
            below_walls: vec![false; width * height],
        };

        for (line_index, line) in lines.iter().enumerate() {
            let line_number = line_index + 1;
            let mut chars: Vec<char> = line.chars().collect();
            if chars.len() > columns {
                bail_maze!(
                    line_number,
                    format!("line is {} columns wide, expected {columns}", chars.len())
                );
            }
            chars.resize(columns, ' ');

            let outer = line_index == 0 || line_index == lines.len() - 1;
            check_border(&chars, outer, line_number)?;

            if line_index % 2 == 1 {
                maze.parse_cell_row(line_index / 2, &chars, line_number)?;
            } else if line_index > 0 && line_index < lines.len() - 1 {
                maze.parse_wall_row(line_index / 2 - 1, &chars, line_number)?;
            }
        }

        tracing::debug!(width, height, "maze parsed");
        Ok(maze)
    }

    /// Read and parse a maze file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Entry cost of a cell, if it is inside the maze
    pub fn cost(&self, juncture: Juncture) -> Option<u32> {
        self.offset(juncture).map(|offset| self.costs[offset])
    }

    fn offset(&self, juncture: Juncture) -> Option<usize> {
        (juncture.x < self.width && juncture.y < self.height)
            .then(|| juncture.y * self.width + juncture.x)
    }

    fn parse_cell_row(&mut self, y: usize, chars: &[char], line_number: usize) -> Result<()> {
        for x in 0..self.width {
            let offset = y * self.width + x;
            let cell = chars[2 * x + 1];
            self.costs[offset] = match cell {
                ' ' | '.' => DEFAULT_COST,
                c => match c.to_digit(10) {
                    Some(cost) => cost,
                    None => bail_maze!(
                        line_number,
                        format!("unexpected cell character {c:?} at column {}", 2 * x + 2)
                    ),
                },
            };

            if x + 1 < self.width {
                self.right_walls[offset] = match chars[2 * x + 2] {
                    '|' => true,
                    ' ' => false,
                    c => bail_maze!(
                        line_number,
                        format!("unexpected wall character {c:?} at column {}", 2 * x + 3)
                    ),
                };
            }
        }
        Ok(())
    }

    fn parse_wall_row(&mut self, y: usize, chars: &[char], line_number: usize) -> Result<()> {
        for x in 0..self.width {
            self.below_walls[y * self.width + x] = match chars[2 * x + 1] {
                '-' => true,
                ' ' => false,
                c => bail_maze!(
                    line_number,
                    format!("unexpected wall character {c:?} at column {}", 2 * x + 2)
                ),
            };
        }
        Ok(())
    }
}

/// Border lines and the outer columns may only hold drawing characters.
fn check_border(chars: &[char], outer: bool, line_number: usize) -> Result<()> {
    let last = chars.len() - 1;
    for (column, &c) in chars.iter().enumerate() {
        if !outer && column != 0 && column != last {
            continue;
        }
        if !matches!(c, '+' | '-' | '|' | ' ') {
            bail_maze!(
                line_number,
                format!("unexpected border character {c:?} at column {}", column + 1)
            );
        }
    }
    Ok(())
}

impl FromStr for TextMaze {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Maze for TextMaze {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn is_wall(&self, juncture: Juncture, side: Side) -> bool {
        let Some(offset) = self.offset(juncture) else {
            return true;
        };
        let Juncture { x, y } = juncture;
        match side {
            Side::Left => x == 0 || self.right_walls[offset - 1],
            Side::Right => x + 1 >= self.width || self.right_walls[offset],
            Side::Above => y == 0 || self.below_walls[offset - self.width],
            Side::Below => y + 1 >= self.height || self.below_walls[offset],
        }
    }

    /// Moving into a cell costs that cell's entry cost; moving off the maze
    /// costs nothing.
    fn weight(&self, juncture: Juncture, side: Side) -> i64 {
        side.step(juncture)
            .and_then(|neighbor| self.cost(neighbor))
            .map_or(0, i64::from)
    }
}
