//! Lock container.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{common::BoxError, grid::Grid};

/// Opaque lock container.
///
/// The state can be changed only through [`LockBox::toggle`].
pub trait LockBox {
    /// Flips every cell in row `row` and every cell in column `col`.
    fn toggle(&mut self, row: usize, col: usize);
    /// Returns `true` if any cell is locked.
    fn is_locked(&self) -> bool;
    /// Returns a snapshot of the current state.
    fn state(&self) -> Grid;
}

impl LockBox for Grid {
    fn toggle(&mut self, row: usize, col: usize) {
        Grid::toggle(self, row, col);
    }

    fn is_locked(&self) -> bool {
        Grid::is_locked(self)
    }

    fn state(&self) -> Grid {
        self.clone()
    }
}

/// Box locked by a seeded random shuffle.
#[derive(Debug, Clone)]
pub struct SecureBox {
    grid: Grid,
    seed: u64,
}

impl SecureBox {
    /// Upper bound (exclusive) of the number of shuffling toggles.
    pub const MAX_SHUFFLES: usize = 1000;

    /// Creates a box shuffled with a random seed.
    ///
    /// # Errors
    ///
    /// If the dimensions are rejected by [`Grid::new`].
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoxError> {
        Self::with_seed(rows, cols, rand::random())
    }

    /// Creates a box shuffled deterministically from `seed`.
    ///
    /// Starts unlocked and applies up to [`Self::MAX_SHUFFLES`] toggles at random
    /// coordinates, so the resulting state is always solvable.
    ///
    /// # Errors
    ///
    /// If the dimensions are rejected by [`Grid::new`].
    #[tracing::instrument]
    pub fn with_seed(rows: usize, cols: usize, seed: u64) -> Result<Self, BoxError> {
        let mut grid = Grid::new(rows, cols)?;
        let mut rng = StdRng::seed_from_u64(seed);
        let shuffles = rng.random_range(0..Self::MAX_SHUFFLES);
        for _ in 0..shuffles {
            grid.toggle(rng.random_range(0..rows), rng.random_range(0..cols));
        }
        tracing::debug!("{shuffles} shuffles, {} cells locked", grid.count_locked());
        Ok(Self { grid, seed })
    }

    /// Seed used for the shuffle.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl LockBox for SecureBox {
    fn toggle(&mut self, row: usize, col: usize) {
        self.grid.toggle(row, col);
    }

    fn is_locked(&self) -> bool {
        self.grid.is_locked()
    }

    fn state(&self) -> Grid {
        self.grid.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn test_with_seed_deterministic() {
        let a = SecureBox::with_seed(4, 6, 42).unwrap();
        let b = SecureBox::with_seed(4, 6, 42).unwrap();
        assert_eq!(a.state(), b.state());
        assert_eq!(a.seed(), 42);
    }

    #[test]
    fn test_with_seed_dims() {
        let b = SecureBox::with_seed(3, 7, 1).unwrap();
        let s = b.state();
        assert_eq!((s.rows(), s.cols()), (3, 7));
    }

    #[test]
    fn test_new_empty() {
        assert_eq!(
            SecureBox::new(0, 3).unwrap_err(),
            BoxError::EmptyDimension { rows: 0, cols: 3 }
        );
    }

    #[test]
    fn test_state_is_snapshot() {
        let mut b = SecureBox::with_seed(3, 3, 7).unwrap();
        let before = b.state();
        b.toggle(1, 1);
        assert_ne!(b.state(), before);
        b.toggle(1, 1);
        assert_eq!(b.state(), before);
    }

    #[test]
    fn test_is_locked() {
        let mut g = Grid::new(2, 2).unwrap();
        assert!(!LockBox::is_locked(&g));
        LockBox::toggle(&mut g, 0, 1);
        assert!(LockBox::is_locked(&g));
        assert_eq!(LockBox::state(&g), g);
    }
}
