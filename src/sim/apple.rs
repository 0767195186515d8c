//! Apple placement.

use super::body::Body;
use super::error::SimError;
use super::grid::{Grid, Position};
use rand::Rng;

/// The single apple on the grid.
///
/// While `needs_replacement` is false the apple never shares a cell with
/// the body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Apple {
    position: Position,
    needs_replacement: bool,
}

impl Default for Apple {
    fn default() -> Self {
        Self::unplaced()
    }
}

impl Apple {
    /// An apple that will be placed on the next tick.
    pub fn unplaced() -> Self {
        Self {
            position: Position::new(0, 0),
            needs_replacement: true,
        }
    }

    /// An apple already placed at `position`.
    pub fn at(position: Position) -> Self {
        Self {
            position,
            needs_replacement: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn needs_replacement(&self) -> bool {
        self.needs_replacement
    }

    pub(crate) fn mark_eaten(&mut self) {
        self.needs_replacement = true;
    }

    /// Draw uniformly over the grid until a cell off the body comes up.
    ///
    /// Fails instead of looping forever when the body covers the grid.
    pub fn place<R: Rng + ?Sized>(
        &mut self,
        grid: &Grid,
        body: &Body,
        rng: &mut R,
    ) -> Result<(), SimError> {
        if body.len() >= grid.area() {
            return Err(SimError::GridFull {
                occupied: body.len(),
                area: grid.area(),
            });
        }

        let position = loop {
            let candidate = Position::new(
                rng.gen_range(0..grid.width()),
                rng.gen_range(0..grid.height()),
            );
            if !body.occupies(candidate) {
                break candidate;
            }
        };

        self.position = position;
        self.needs_replacement = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn placement_avoids_body() {
        let grid = Grid::new(3, 3);
        let body = Body::new(
            (0..3)
                .flat_map(|x| (0..3).map(move |y| Position::new(x, y)))
                .filter(|p| *p != Position::new(2, 1)),
            9,
            &grid,
        )
        .unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let mut apple = Apple::unplaced();
        apple.place(&grid, &body, &mut rng).unwrap();

        assert_eq!(apple.position(), Position::new(2, 1));
        assert!(!apple.needs_replacement());
    }

    #[test]
    fn placement_fails_on_full_grid() {
        let grid = Grid::new(2, 1);
        let body = Body::new([Position::new(0, 0), Position::new(1, 0)], 2, &grid).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let mut apple = Apple::unplaced();
        assert_eq!(
            apple.place(&grid, &body, &mut rng),
            Err(SimError::GridFull {
                occupied: 2,
                area: 2
            })
        );
        assert!(apple.needs_replacement());
    }

    #[test]
    fn eaten_apple_needs_replacement() {
        let mut apple = Apple::at(Position::new(1, 1));
        assert!(!apple.needs_replacement());
        apple.mark_eaten();
        assert!(apple.needs_replacement());
        assert_eq!(apple.position(), Position::new(1, 1));
    }
}
