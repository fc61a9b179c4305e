//! Orientation normalization.
//!
//! The system is always built for a grid with no more rows than columns.
//! Taller grids are solved transposed and the toggles are mapped back.

use std::borrow::Cow;

use crate::{common::Coord, grid::Grid, internal::utils};

/// How a grid was turned before solving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Solved as is.
    Original,
    /// Solved on the transpose, as the grid has more rows than columns.
    Transposed,
}

impl Orientation {
    /// Chooses the orientation for a `rows` x `cols` grid.
    #[must_use]
    pub fn of(rows: usize, cols: usize) -> Self {
        if rows > cols {
            Self::Transposed
        } else {
            Self::Original
        }
    }

    /// Returns the orientation of `grid` and the grid to solve.
    #[must_use]
    pub fn normalize(grid: &Grid) -> (Self, Cow<'_, Grid>) {
        match Self::of(grid.rows(), grid.cols()) {
            Self::Original => (Self::Original, Cow::Borrowed(grid)),
            Self::Transposed => (Self::Transposed, Cow::Owned(grid.transpose())),
        }
    }

    /// Maps a coordinate of the normalized grid back to the original grid.
    #[must_use]
    pub fn restore(self, coord: Coord) -> Coord {
        match self {
            Self::Original => coord,
            Self::Transposed => utils::transpose(coord),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of() {
        assert_eq!(Orientation::of(3, 5), Orientation::Original);
        assert_eq!(Orientation::of(4, 4), Orientation::Original);
        assert_eq!(Orientation::of(5, 3), Orientation::Transposed);
    }

    #[test]
    fn test_normalize_wide() {
        let g = grid![[1, 0, 0], [0, 1, 0]];
        let (o, n) = Orientation::normalize(&g);
        assert_eq!(o, Orientation::Original);
        assert!(matches!(n, Cow::Borrowed(_)));
        assert_eq!(*n, g);
    }

    #[test]
    fn test_normalize_tall() {
        let g = grid![[1, 0], [0, 0], [0, 1]];
        let (o, n) = Orientation::normalize(&g);
        assert_eq!(o, Orientation::Transposed);
        assert_eq!((n.rows(), n.cols()), (2, 3));
        for (r, c) in n.locked_cells() {
            let (r0, c0) = o.restore((r, c));
            assert!(g.get(r0, c0));
        }
        assert_eq!(n.count_locked(), g.count_locked());
    }

    #[test]
    fn test_restore() {
        assert_eq!(Orientation::Original.restore((1, 2)), (1, 2));
        assert_eq!(Orientation::Transposed.restore((1, 2)), (2, 1));
    }
}
