//! Snake body: an ordered run of occupied cells, tail first.

use super::error::SimError;
use super::grid::{Grid, Position};
use std::collections::{HashSet, VecDeque};

/// Ordered body segments. Index 0 is the tail, the last index is the head.
///
/// Segments are pairwise distinct and never exceed `capacity`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Body {
    segments: VecDeque<Position>,
    capacity: usize,
}

impl Body {
    /// Build a body from tail-first segments.
    ///
    /// Fails when the body is empty, longer than `capacity`, leaves the grid
    /// or overlaps itself.
    pub fn new(
        segments: impl IntoIterator<Item = Position>,
        capacity: usize,
        grid: &Grid,
    ) -> Result<Self, SimError> {
        let segments: VecDeque<Position> = segments.into_iter().collect();

        if segments.is_empty() {
            return Err(SimError::InvalidBody {
                reason: "body has no segments".to_string(),
            });
        }
        if segments.len() > capacity {
            return Err(SimError::InvalidBody {
                reason: format!(
                    "{} segments exceed capacity {}",
                    segments.len(),
                    capacity
                ),
            });
        }
        if let Some(&position) = segments.iter().find(|p| !grid.contains(**p)) {
            return Err(SimError::OutOfBounds {
                position,
                width: grid.width(),
                height: grid.height(),
            });
        }
        let mut seen = HashSet::with_capacity(segments.len());
        if let Some(dup) = segments.iter().find(|p| !seen.insert(**p)) {
            return Err(SimError::InvalidBody {
                reason: format!("segment {dup} appears twice"),
            });
        }

        Ok(Self { segments, capacity })
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// A constructed body always has at least one segment.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn head(&self) -> Position {
        self.segments[self.segments.len() - 1]
    }

    pub fn tail(&self) -> Position {
        self.segments[0]
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.segments.contains(&pos)
    }

    /// Segments tail first.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.segments.iter().copied()
    }

    /// Every segment except the head, tail first.
    pub fn trailing(&self) -> impl Iterator<Item = Position> + '_ {
        self.segments.iter().take(self.segments.len() - 1).copied()
    }

    /// Append a new head and keep the tail in place.
    pub(crate) fn grow(&mut self, head: Position) -> Result<(), SimError> {
        if self.segments.len() >= self.capacity {
            return Err(SimError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.segments.push_back(head);
        Ok(())
    }

    /// Append a new head and drop the tail. Returns the vacated cell.
    pub(crate) fn slide(&mut self, head: Position) -> Position {
        self.segments.push_back(head);
        // length was at least one before the push
        self.segments.pop_front().unwrap_or(head)
    }
}
