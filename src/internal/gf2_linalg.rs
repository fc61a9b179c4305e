//! GF(2) linear solver.

use std::{
    fmt::{self, Debug, Formatter},
    ops::DerefMut,
};

use fixedbitset::FixedBitSet;
use itertools::Itertools;

/// Gauss-Jordan solver for `A x = b` over GF(2).
///
/// Each row of `work` is one equation: `cols` coefficient bits followed by the
/// right-hand side bit. Columns are never permuted; rows are swapped to bring
/// a pivot up, and each column remembers the row holding its pivot.
#[derive(PartialEq, Eq)]
pub struct GF2Solver<W: DerefMut<Target = [FixedBitSet]>> {
    /// Number of equations.
    rows: usize,
    /// Number of unknowns. Also the index of the right-hand side column.
    cols: usize,
    /// Rank of `A`. Available after elimination.
    rank: Option<usize>,
    /// Pivot row of each unknown. `None` for free variables.
    pivots: Vec<Option<usize>>,
    /// Augmented matrix `[A | b]`, reduced in place.
    work: W,
}

impl<W: DerefMut<Target = [FixedBitSet]>> GF2Solver<W> {
    /// Wraps the augmented matrix `[A | b]`.
    ///
    /// # Panics
    ///
    /// - If `work` has no equations.
    /// - If the equations differ in width.
    /// - If there is no room for at least one unknown besides `b`.
    pub fn new(work: W) -> Self {
        assert!(!work.is_empty(), "no equations");
        let Ok(width) = work.iter().map(FixedBitSet::len).all_equal_value() else {
            panic!("equations differ in width");
        };
        assert!(width >= 2, "no unknowns");
        let cols = width - 1;
        Self {
            rows: work.len(),
            cols,
            rank: None,
            pivots: vec![None; cols],
            work,
        }
    }

    /// Rank of `A`, if already eliminated.
    pub fn rank(&self) -> Option<usize> {
        self.rank
    }

    /// Number of unknowns left free by the elimination.
    pub fn nullity(&self) -> Option<usize> {
        self.rank.map(|rank| self.cols - rank)
    }

    /// Right-hand side of equation `r`.
    fn rhs(&self, r: usize) -> bool {
        self.work[r][self.cols]
    }

    /// Finds the first equation at or below `top` with `1` in column `c`.
    fn find_pivot(&self, top: usize, c: usize) -> Option<usize> {
        (top..self.rows).find(|&r| self.work[r][c])
    }

    /// Clears column `c` in every equation other than `pivot`.
    fn eliminate_column(&mut self, pivot: usize, c: usize) {
        for r in 0..self.rows {
            if r == pivot || !self.work[r][c] {
                continue;
            }
            let [src, dst] = self
                .work
                .get_disjoint_mut([pivot, r])
                .expect("r != pivot");
            dst.symmetric_difference_with(src);
        }
    }

    /// Reduces `work` to the reduced row echelon form.
    ///
    /// No-op once done.
    fn eliminate(&mut self) {
        if self.rank.is_some() {
            return;
        }
        let mut rank = 0;
        for c in 0..self.cols {
            if rank == self.rows {
                break;
            }
            // Free variable
            let Some(r) = self.find_pivot(rank, c) else {
                continue;
            };
            self.work.swap(rank, r);
            self.pivots[c] = Some(rank);
            self.eliminate_column(rank, c);
            rank += 1;
        }
        self.rank = Some(rank);
        debug_assert!(self.is_reduced());
    }

    /// Checks the shape after the elimination.
    ///
    /// 1. Pivot rows are `0..rank`, in column order.
    /// 2. Each pivot column is zero except at its pivot row.
    /// 3. Equations from `rank` on have no coefficients left.
    fn is_reduced(&self) -> bool {
        let rank = self.rank.expect("eliminated");
        let pivot_rows = self.pivots.iter().flatten().copied().collect_vec();
        if pivot_rows != (0..rank).collect_vec() {
            return false;
        }
        let unit_columns = self.pivots.iter().enumerate().all(|(c, pivot)| {
            pivot.is_none_or(|p| self.work.iter().enumerate().all(|(r, row)| row[c] == (r == p)))
        });
        unit_columns
            && self.work[rank..]
                .iter()
                .all(|row| row.count_ones(..self.cols) == 0)
    }

    /// Solves the system, eliminating first if needed.
    ///
    /// Free variables are set to `0`.
    ///
    /// # Returns
    ///
    /// `None` if some equation reduced to `0 = 1`.
    pub fn solve(&mut self) -> Option<FixedBitSet> {
        self.eliminate();
        let rank = self.rank.expect("eliminated");
        if (rank..self.rows).any(|r| self.rhs(r)) {
            return None;
        }
        let mut x = FixedBitSet::with_capacity(self.cols);
        for (c, &pivot) in self.pivots.iter().enumerate() {
            if let Some(p) = pivot {
                x.set(c, self.rhs(p));
            }
        }
        Some(x)
    }
}

/// Prints one equation per line as `coefficients|rhs`.
impl<W: DerefMut<Target = [FixedBitSet]>> Debug for GF2Solver<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "GF2Solver {}x{} rank={:?} pivots={:?}",
            self.rows, self.cols, self.rank, self.pivots
        )?;
        for row in self.work.iter() {
            let co = (0..self.cols).map(|c| u8::from(row[c])).join("");
            writeln!(f, "  {co}|{}", u8::from(row[self.cols]))?;
        }
        Ok(())
    }
}
