//! Grid-based snake simulation.
//!
//! The engine advances once per tick: it replaces an eaten apple, moves the
//! head one step in the current direction with wraparound, and reports
//! whether the body moved, grew or collided with itself. Rendering turns the
//! resulting state into a single [`Frame`].

mod apple;
mod body;
mod direction;
mod engine;
mod error;
mod frame;
mod grid;

pub use apple::Apple;
pub use body::Body;
pub use direction::Direction;
pub use engine::{Engine, Outcome, Tick};
pub use error::SimError;
pub use frame::{Color, DrawCmd, Frame, Glyph, Renderer};
pub use grid::{Grid, Position};
