//! Validation rules for [`SnakeConfig`].

use super::error::ConfigViolation;
use super::SnakeConfig;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

fn require(ok: bool, violation: impl FnOnce() -> ConfigViolation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Run every rule and accumulate ALL violations.
pub(super) fn validate(config: &SnakeConfig) -> Check {
    let mut checks: Vec<Check> = Vec::new();

    let non_zero: [(&'static str, bool); 6] = [
        ("width", config.width > 0),
        ("height", config.height > 0),
        ("max_len", config.max_len > 0),
        ("start_timeout_ms", config.start_timeout_ms > 0),
        ("stop_timeout_ms", config.stop_timeout_ms > 0),
        ("tick_ms", config.tick_ms > 0),
    ];
    for (field, ok) in non_zero {
        checks.push(require(ok, || ConfigViolation::Zero { field }));
    }

    let grid = config.grid();
    checks.push(require(config.max_len < grid.area(), || {
        ConfigViolation::CapacityTooLarge {
            max_len: config.max_len,
            area: grid.area(),
        }
    }));

    let body = &config.initial_body;
    checks.push(require(!body.is_empty(), || ConfigViolation::EmptyBody));
    checks.push(require(body.len() <= config.max_len, || {
        ConfigViolation::BodyTooLong {
            len: body.len(),
            max_len: config.max_len,
        }
    }));

    let mut seen = HashSet::with_capacity(body.len());
    for (index, &segment) in body.iter().enumerate() {
        checks.push(require(grid.contains(segment), || {
            ConfigViolation::SegmentOutOfBounds { index }
        }));
        checks.push(require(seen.insert(segment), || {
            ConfigViolation::SegmentOverlap { index }
        }));
        if index > 0 && grid.area() > 0 {
            checks.push(require(grid.adjacent(body[index - 1], segment), || {
                ConfigViolation::SegmentDetached { index }
            }));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}
