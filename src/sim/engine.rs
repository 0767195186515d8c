//! Per-tick simulation step.

use super::apple::Apple;
use super::body::Body;
use super::direction::Direction;
use super::error::SimError;
use super::grid::{Grid, Position};
use crate::config::SnakeConfig;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

/// What a single tick did to the body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Head advanced and the tail followed.
    Moved,
    /// Head advanced onto the apple; the tail stayed put.
    Grew,
    /// The next head cell is already occupied. Nothing changed.
    Collided,
}

/// Result of [`Engine::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    pub outcome: Outcome,
    /// Cell released by the tail, only for [`Outcome::Moved`].
    pub vacated: Option<Position>,
}

/// Snake simulation state: grid, body, apple and heading.
#[derive(Clone, Debug)]
pub struct Engine {
    grid: Grid,
    body: Body,
    apple: Apple,
    direction: Direction,
    rng: ChaCha8Rng,
}

impl Engine {
    pub fn new(grid: Grid, body: Body, direction: Direction, rng: ChaCha8Rng) -> Self {
        Self {
            grid,
            body,
            apple: Apple::unplaced(),
            direction,
            rng,
        }
    }

    /// Fresh game from configuration. Without `rng_seed` the RNG is seeded
    /// from entropy.
    pub fn from_config(config: &SnakeConfig) -> Result<Self, SimError> {
        let grid = config.grid();
        let body = Body::new(config.initial_body.iter().copied(), config.max_len, &grid)?;
        let rng = match config.rng_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(Self::new(grid, body, config.initial_direction, rng))
    }

    /// Replace the apple, e.g. to stage a scenario.
    pub fn with_apple(mut self, apple: Apple) -> Self {
        self.apple = apple;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Set the heading used by the next tick. Last write wins; reversing
    /// into the body is accepted here and caught by the next tick.
    pub fn turn(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Advance the simulation by one tick.
    pub fn advance(&mut self) -> Result<Tick, SimError> {
        if self.apple.needs_replacement() {
            self.apple.place(&self.grid, &self.body, &mut self.rng)?;
            trace!(apple = %self.apple.position(), "apple placed");
        }

        let candidate = self.grid.step(self.body.head(), self.direction.delta());

        if self.body.occupies(candidate) {
            trace!(head = %candidate, "collision");
            return Ok(Tick {
                outcome: Outcome::Collided,
                vacated: None,
            });
        }

        let tick = if candidate == self.apple.position() {
            self.body.grow(candidate)?;
            self.apple.mark_eaten();
            Tick {
                outcome: Outcome::Grew,
                vacated: None,
            }
        } else {
            let vacated = self.body.slide(candidate);
            Tick {
                outcome: Outcome::Moved,
                vacated: Some(vacated),
            }
        };

        trace!(
            direction = %self.direction,
            head = %candidate,
            len = self.body.len(),
            outcome = ?tick.outcome,
            "tick"
        );
        Ok(tick)
    }
}
