//! Common functionalities.

use thiserror::Error;

/// Grid coordinate as `(row, col)`.
pub type Coord = (usize, usize);

/// Set of coordinates to toggle.
///
/// Toggles commute and cancel in pairs, so neither order nor multiplicity is kept.
pub type Toggles = hashbrown::HashSet<Coord>;

pub(crate) const FATAL_MSG: &str = "\
fatal: toggles found by the solver failed to unlock the grid
please report this as a bug";

/// Error type for grid construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoxError {
    #[error("grid must have at least one row and one column: got {rows}x{cols}")]
    EmptyDimension { rows: usize, cols: usize },
    #[error("{rows}x{cols} grid has too many cells")]
    DimensionOverflow { rows: usize, cols: usize },
    #[error("row {row} has {len} cells, expected {cols}")]
    JaggedRows { row: usize, len: usize, cols: usize },
}

/// Error type for toggle verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    #[error("toggle ({row}, {col}) outside {rows}x{cols} grid")]
    ToggleOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("cell ({row}, {col}) still locked")]
    StillLocked { row: usize, col: usize },
}
