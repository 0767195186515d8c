//! Fixed-size wraparound grid.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell on the grid. Origin is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u32, u32)> for Position {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

/// Bounded coordinate space where leaving one edge re-enters at the opposite
/// edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: u32,
    height: u32,
}

impl Grid {
    /// Both dimensions must be non-zero; `SnakeConfig::validate` enforces it.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells on the grid.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Offset `pos` by `(dx, dy)` and fold the result back into the grid.
    pub fn step(&self, pos: Position, (dx, dy): (i32, i32)) -> Position {
        Position {
            x: wrap(i64::from(pos.x) + i64::from(dx), self.width),
            y: wrap(i64::from(pos.y) + i64::from(dy), self.height),
        }
    }

    /// True when `a` and `b` are one unit step apart, edges included.
    pub fn adjacent(&self, a: Position, b: Position) -> bool {
        [(1, 0), (-1, 0), (0, 1), (0, -1)]
            .into_iter()
            .any(|delta| self.step(a, delta) == b)
    }
}

fn wrap(value: i64, bound: u32) -> u32 {
    // rem_euclid keeps the result in [0, bound) for negative inputs too
    value.rem_euclid(i64::from(bound)) as u32
}
