//! Rust-side input validations.

use crate::common::{
    BoxError::{self, DimensionOverflow, EmptyDimension},
    Coord,
    VerificationError::{self, ToggleOutOfRange},
};

/// Checks the grid dimensions and returns the number of cells.
///
/// # Errors
///
/// - If either dimension is zero.
/// - If `rows * cols` overflows `usize`.
pub fn check_dims(rows: usize, cols: usize) -> Result<usize, BoxError> {
    if rows == 0 || cols == 0 {
        return Err(EmptyDimension { rows, cols });
    }
    rows.checked_mul(cols)
        .ok_or(DimensionOverflow { rows, cols })
}

/// Checks that every toggle lies inside a `rows` x `cols` grid.
pub fn check_toggles<'a>(
    toggles: impl IntoIterator<Item = &'a Coord>,
    rows: usize,
    cols: usize,
) -> Result<(), VerificationError> {
    for &(row, col) in toggles {
        if row >= rows || col >= cols {
            return Err(ToggleOutOfRange {
                row,
                col,
                rows,
                cols,
            });
        }
    }
    Ok(())
}
