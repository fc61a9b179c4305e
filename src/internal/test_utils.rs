//! Testing utilities.

use std::sync::LazyLock;

use crate::{common::Coord, grid::Grid, securebox::LockBox};

/// Creates a [`Grid`] from rows of `0`/`1` literals.
macro_rules! grid {
    ($([$($x:literal),* $(,)?]),* $(,)?) => {
        $crate::grid::Grid::from_rows(&[$(vec![$($x != 0),*]),*]).expect("valid grid literal")
    };
}

/// Box that records every toggle applied to it.
#[derive(Debug, Clone)]
pub struct RecordingBox {
    pub grid: Grid,
    pub log: Vec<Coord>,
}

impl RecordingBox {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            log: Vec::new(),
        }
    }
}

impl LockBox for RecordingBox {
    fn toggle(&mut self, row: usize, col: usize) {
        self.log.push((row, col));
        self.grid.toggle(row, col);
    }

    fn is_locked(&self) -> bool {
        self.grid.is_locked()
    }

    fn state(&self) -> Grid {
        self.grid.clone()
    }
}

/// Creates the state reached from the unlocked grid by toggling the cells set in `mask`.
///
/// Bit `i` of `mask` stands for the cell flattened to `i`.
pub fn reachable(rows: usize, cols: usize, mask: u64) -> Grid {
    assert!(rows * cols <= 64, "mask too narrow");
    let mut g = Grid::new(rows, cols).expect("valid dimensions");
    for i in 0..rows * cols {
        if (mask >> i) & 1 == 1 {
            g.toggle(i / cols, i % cols);
        }
    }
    g
}

/// Fully locked 2x2 grid.
pub static CASE_2X2: LazyLock<Grid> = LazyLock::new(|| grid![[1, 1], [1, 1]]);

/// 3x5 state reachable by toggling `(0, 1)`, `(1, 4)`, and `(2, 2)`.
pub static CASE_3X5: LazyLock<Grid> = LazyLock::new(|| {
    grid![
        [1, 1, 0, 1, 0],
        [1, 0, 0, 1, 1],
        [1, 0, 1, 1, 0],
    ]
});

/// Single row with one locked cell. Every toggle flips the whole row, so no solution.
pub static CASE_1X3_UNSOLVABLE: LazyLock<Grid> = LazyLock::new(|| grid![[1, 0, 0]]);
