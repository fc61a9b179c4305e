//! Utilities.

use crate::common::Coord;

/// Maps `(row, col)` to its row-major index in a grid of width `width`.
#[inline]
pub fn flatten(row: usize, col: usize, width: usize) -> usize {
    debug_assert!(col < width, "column out of range");
    row * width + col
}

/// Inverse of [`flatten`] for the same `width`.
#[inline]
pub fn unflatten(index: usize, width: usize) -> Coord {
    debug_assert!(width > 0, "zero width");
    (index / width, index % width)
}

/// Swaps the roles of row and column.
#[inline]
pub fn transpose((row, col): Coord) -> Coord {
    (col, row)
}
