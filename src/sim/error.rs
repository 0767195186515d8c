//! Simulation error types.

use super::grid::Position;
use thiserror::Error;

/// Contract violations raised by the simulation engine.
///
/// None of these are game outcomes; a collision is reported through
/// [`Outcome::Collided`](super::Outcome::Collided).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SimError {
    /// Eating an apple would grow the body past its fixed capacity.
    #[error("Body capacity ({capacity}) exceeded")]
    CapacityExceeded { capacity: usize },

    /// No free cell remains for an apple.
    #[error("No free cell for an apple: body covers {occupied} of {area} cells")]
    GridFull { occupied: usize, area: usize },

    /// A body was constructed that breaks its invariants.
    #[error("Invalid body: {reason}")]
    InvalidBody { reason: String },

    /// A position lies outside the grid.
    #[error("Position {position} is outside the {width}x{height} grid")]
    OutOfBounds {
        position: Position,
        width: u32,
        height: u32,
    },
}
