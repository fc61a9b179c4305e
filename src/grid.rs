//! Boolean lock grid.

use std::fmt::{self, Display, Formatter};

use fixedbitset::FixedBitSet;

use crate::{
    common::{BoxError, Coord},
    internal::validate,
};

/// Grid of lock cells, `true` meaning locked.
///
/// Dimensions are fixed at construction and never change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// One bitset of length `cols` per row.
    cells: Vec<FixedBitSet>,
}

impl Grid {
    /// Creates an unlocked `rows` x `cols` grid.
    ///
    /// # Errors
    ///
    /// - If either dimension is zero.
    /// - If the number of cells overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoxError> {
        validate::check_dims(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![FixedBitSet::with_capacity(cols); rows],
        })
    }

    /// Creates a grid from row slices.
    ///
    /// # Errors
    ///
    /// - If `src` is empty or its first row is empty.
    /// - If the rows have different lengths.
    pub fn from_rows<R: AsRef<[bool]>>(src: &[R]) -> Result<Self, BoxError> {
        let rows = src.len();
        let cols = src.first().map_or(0, |row| row.as_ref().len());
        let mut grid = Self::new(rows, cols)?;
        for (r, row) in src.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(BoxError::JaggedRows {
                    row: r,
                    len: row.len(),
                    cols,
                });
            }
            for (c, &x) in row.iter().enumerate() {
                grid.cells[r].set(c, x);
            }
        }
        Ok(grid)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the state of `(row, col)`.
    ///
    /// # Panics
    ///
    /// If `(row, col)` is out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.assert_in_range(row, col);
        self.cells[row][col]
    }

    /// Overwrites the state of `(row, col)`.
    ///
    /// # Panics
    ///
    /// If `(row, col)` is out of range.
    pub fn set(&mut self, row: usize, col: usize, locked: bool) {
        self.assert_in_range(row, col);
        self.cells[row].set(col, locked);
    }

    /// Flips every cell in row `row` and every cell in column `col`.
    ///
    /// The crossing cell `(row, col)` flips exactly once.
    ///
    /// # Panics
    ///
    /// If `(row, col)` is out of range.
    pub fn toggle(&mut self, row: usize, col: usize) {
        self.assert_in_range(row, col);
        self.cells[row].toggle_range(..);
        for (r, cells) in self.cells.iter_mut().enumerate() {
            if r != row {
                cells.toggle(col);
            }
        }
    }

    /// Returns `true` if any cell is locked.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.cells.iter().any(|row| row.count_ones(..) > 0)
    }

    /// Returns the number of locked cells.
    #[must_use]
    pub fn count_locked(&self) -> usize {
        self.cells.iter().map(|row| row.count_ones(..)).sum()
    }

    /// Iterates over the locked cells in row-major order.
    pub fn locked_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.ones().map(move |c| (r, c)))
    }

    /// Returns the transposed grid.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut cells = vec![FixedBitSet::with_capacity(self.rows); self.cols];
        for (r, c) in self.locked_cells() {
            cells[c].insert(r);
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    fn assert_in_range(&self, row: usize, col: usize) {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) out of range for {}x{} grid",
            self.rows,
            self.cols
        );
    }
}

/// Renders rows of `0`/`1` separated by spaces.
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for c in 0..self.cols {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", u8::from(row[c]))?;
            }
        }
        Ok(())
    }
}
