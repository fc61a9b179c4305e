//! GF(2) linear system of the toggle puzzle.
//!
//! Equation `i` is the cell flattened to `i`, and unknown `j` is the toggle at the
//! coordinate flattened to `j`. The coefficient `[i][j]` is `1` iff the two
//! coordinates share a row or a column.

use fixedbitset::FixedBitSet;

use crate::{
    grid::Grid,
    internal::utils::{flatten, unflatten},
};

/// Builds the coefficient matrix of a `rows` x `cols` grid as row bitsets.
///
/// Depends only on the dimensions, so it can be reused across states of the same shape.
#[must_use]
pub fn build_matrix(rows: usize, cols: usize) -> Vec<FixedBitSet> {
    let n = rows * cols;
    (0..n)
        .map(|eq| {
            let (r, c) = unflatten(eq, cols);
            let mut row = FixedBitSet::with_capacity(n);
            // Same row
            row.insert_range(flatten(r, 0, cols)..flatten(r, 0, cols) + cols);
            // Same column
            for x in 0..rows {
                row.insert(flatten(x, c, cols));
            }
            row
        })
        .collect()
}

/// Builds the right-hand side: the flattened current state.
#[must_use]
pub fn build_rhs(state: &Grid) -> FixedBitSet {
    let mut rhs = FixedBitSet::with_capacity(state.rows() * state.cols());
    for (r, c) in state.locked_cells() {
        rhs.insert(flatten(r, c, state.cols()));
    }
    rhs
}

/// Builds the augmented matrix `[A | b]`, with `b` in the last column.
pub(crate) fn build_augmented(state: &Grid) -> Vec<FixedBitSet> {
    let mut work = build_matrix(state.rows(), state.cols());
    let n = work.len();
    for row in &mut work {
        row.grow(n + 1);
    }
    for eq in build_rhs(state).ones() {
        work[eq].insert(n);
    }
    work
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn test_build_matrix_2x2() {
        let co = build_matrix(2, 2);
        // Variables (0, 0), (0, 1), (1, 0), (1, 1)
        let rows = co.iter().map(|row| format!("{row}")).collect_vec();
        assert_eq!(rows, vec!["1110", "1101", "1011", "0111"]);
    }

    #[test]
    fn test_build_matrix_rule() {
        let (rows, cols) = (3, 4);
        let co = build_matrix(rows, cols);
        assert_eq!(co.len(), rows * cols);
        for (eq, row) in co.iter().enumerate() {
            assert_eq!(row.len(), rows * cols);
            let (r, c) = unflatten(eq, cols);
            for var in 0..rows * cols {
                let (x, y) = unflatten(var, cols);
                assert_eq!(row[var], r == x || c == y);
            }
        }
    }

    #[test]
    fn test_build_matrix_symmetric() {
        let co = build_matrix(3, 5);
        for (i, row) in co.iter().enumerate() {
            for j in row.ones() {
                assert!(co[j][i]);
            }
        }
    }

    #[test]
    fn test_build_rhs() {
        let g = grid![[1, 0, 0], [0, 1, 1]];
        let rhs = build_rhs(&g);
        assert_eq!(format!("{rhs}"), "100011");
    }

    #[test]
    fn test_build_augmented() {
        let g = grid![[0, 1], [1, 1]];
        let work = build_augmented(&g);
        let rows = work.iter().map(|row| format!("{row}")).collect_vec();
        assert_eq!(rows, vec!["11100", "11011", "10111", "01111"]);
    }

    #[test]
    fn test_build_augmented_layout() {
        let g = grid![[1, 0, 1], [0, 0, 1], [1, 1, 0]];
        let co = build_matrix(3, 3);
        let rhs = build_rhs(&g);
        let work = build_augmented(&g);
        assert_eq!(work.len(), co.len());
        for (eq, row) in work.iter().enumerate() {
            assert_eq!(row.len(), co.len() + 1);
            assert_eq!(row.ones().filter(|&c| c < co.len()).collect_vec(), co[eq].ones().collect_vec());
            assert_eq!(row[co.len()], rhs[eq]);
        }
    }

    #[test]
    fn test_build_matrix_single_cell() {
        let co = build_matrix(1, 1);
        assert_eq!(co.len(), 1);
        assert!(co[0][0]);
    }
}
