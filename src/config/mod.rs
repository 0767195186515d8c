//! Configuration for the snake active object.
//!
//! Every field has a default, so a JSON document only needs to name what it
//! overrides:
//!
//! ```rust
//! use snake_act::config::SnakeConfig;
//!
//! let config = SnakeConfig::from_json(r#"{ "tick_ms": 250, "rng_seed": 7 }"#).unwrap();
//! assert_eq!(config.tick_ms, 250);
//! assert_eq!(config.width, 11);
//! ```
//!
//! Validation accumulates every broken rule instead of stopping at the
//! first one.

mod error;
mod rules;

pub use error::{ConfigError, ConfigViolation};

use crate::sim::{Direction, Grid, Position};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Tunables for one snake active object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    /// Name used as the origin of errors and as the requester of
    /// self-initiated requests.
    pub name: String,
    /// Grid width (`MAX_X`).
    pub width: u32,
    /// Grid height (`MAX_Y`).
    pub height: u32,
    /// Body capacity (`MAX_LEN`).
    pub max_len: usize,
    pub start_timeout_ms: u64,
    pub stop_timeout_ms: u64,
    /// Period of the simulation tick.
    pub tick_ms: u64,
    /// Pixel size of one grid cell on the display.
    pub cell_px: u32,
    pub glyph_scale: u8,
    /// Tail-first body at the start of each run.
    pub initial_body: Vec<Position>,
    pub initial_direction: Direction,
    /// Fixed seed for apple placement. `None` seeds from entropy.
    pub rng_seed: Option<u64>,
    /// Collaborators that receive start/stop sub-requests.
    pub dependencies: Vec<String>,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            name: "SNAKE_ACT".to_string(),
            width: 11,
            height: 13,
            max_len: 30,
            start_timeout_ms: 200,
            stop_timeout_ms: 200,
            tick_ms: 1000,
            cell_px: 20,
            glyph_scale: 2,
            initial_body: (0..6).map(|y| Position::new(0, y)).collect(),
            initial_direction: Direction::West,
            rng_seed: None,
            dependencies: Vec::new(),
        }
    }
}

impl SnakeConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validated()
    }

    /// Read and parse a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Check every rule, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        rules::validate(self)
    }

    /// Consume the config, returning it only if it is valid.
    pub fn validated(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(self),
            Validation::Failure(errors) => {
                Err(ConfigError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.width, self.height)
    }

    pub fn start_timeout(&self) -> Duration {
        Duration::from_millis(self.start_timeout_ms)
    }

    pub fn stop_timeout(&self) -> Duration {
        Duration::from_millis(self.stop_timeout_ms)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
