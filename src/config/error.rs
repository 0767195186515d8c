//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// A single broken configuration rule.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("Field '{field}' must be greater than zero")]
    Zero { field: &'static str },

    #[error("max_len ({max_len}) must be smaller than the grid area ({area})")]
    CapacityTooLarge { max_len: usize, area: usize },

    #[error("initial_body must not be empty")]
    EmptyBody,

    #[error("initial_body has {len} segments, more than max_len ({max_len})")]
    BodyTooLong { len: usize, max_len: usize },

    #[error("initial_body segment {index} is outside the grid")]
    SegmentOutOfBounds { index: usize },

    #[error("initial_body segment {index} overlaps an earlier segment")]
    SegmentOverlap { index: usize },

    #[error("initial_body segment {index} is not adjacent to the previous one")]
    SegmentDetached { index: usize },
}

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {}", render(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn render(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
