//! Heading of the snake.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction the head moves on the next tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Unit step applied to the head as `(dx, dy)`.
    ///
    /// North/South move along x and East/West along y, with East decreasing
    /// y. Existing clients depend on this orientation.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (-1, 0),
            Self::South => (1, 0),
            Self::East => (0, -1),
            Self::West => (0, 1),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
