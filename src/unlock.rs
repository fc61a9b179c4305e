//! Unlocking pipeline.
//!
//! snapshot -> normalize orientation -> build `[A | b]` -> eliminate -> map back -> toggle.

use itertools::Itertools;

use crate::{
    common::{BoxError, Coord, Toggles, VerificationError, FATAL_MSG},
    grid::Grid,
    internal::{gf2_linalg::GF2Solver, utils, validate},
    orientation::Orientation,
    securebox::{LockBox, SecureBox},
    system,
};

/// Finds a set of toggles that unlocks `state`.
///
/// Free variables are left untoggled, so the result is one valid set, not
/// necessarily the smallest.
///
/// # Returns
///
/// `None` if no combination of toggles unlocks `state`.
///
/// # Note
///
/// Costs `O((rows * cols)^3)` bit operations. Bounding the grid size is up to the caller.
#[must_use]
#[tracing::instrument(skip_all, fields(rows = state.rows(), cols = state.cols()))]
pub fn find_toggles(state: &Grid) -> Option<Toggles> {
    let (orientation, grid) = Orientation::normalize(state);
    tracing::debug!("orientation: {orientation:?}");
    let cols = grid.cols();
    let mut work = system::build_augmented(&grid);
    let mut solver = GF2Solver::new(work.as_mut_slice());
    let Some(x) = solver.solve() else {
        tracing::debug!("inconsistent system, rank: {:?}", solver.rank());
        return None;
    };
    tracing::debug!("rank: {:?}, free: {:?}", solver.rank(), solver.nullity());
    let toggles = x
        .ones()
        .map(|i| orientation.restore(utils::unflatten(i, cols)))
        .collect::<Toggles>();
    tracing::debug!("{} toggles found", toggles.len());
    verify(state, &toggles).expect(FATAL_MSG);
    Some(toggles)
}

/// Checks that applying `toggles` to `state` unlocks it.
///
/// # Errors
///
/// - If a toggle is out of range.
/// - If a cell remains locked. The first one in row-major order is reported.
pub fn verify(state: &Grid, toggles: &Toggles) -> Result<(), VerificationError> {
    validate::check_toggles(toggles, state.rows(), state.cols())?;
    let mut work = state.clone();
    for &(row, col) in toggles {
        work.toggle(row, col);
    }
    let first = work.locked_cells().next();
    match first {
        Some((row, col)) => Err(VerificationError::StillLocked { row, col }),
        None => Ok(()),
    }
}

/// Applies `toggles` to `lockbox` and returns whether it is still locked.
///
/// Toggles commute, but are applied in row-major order for reproducible logs.
pub fn apply_toggles<B: LockBox + ?Sized>(lockbox: &mut B, toggles: &Toggles) -> bool {
    for &(row, col) in toggles.iter().sorted_unstable() {
        tracing::trace!("toggle ({row}, {col})");
        lockbox.toggle(row, col);
    }
    lockbox.is_locked()
}

/// Unlocks `lockbox` using only its public operations.
///
/// Returns `false` on success, `true` if the box remains locked.
#[tracing::instrument(skip_all)]
pub fn unlock<B: LockBox + ?Sized>(lockbox: &mut B) -> bool {
    let state = lockbox.state();
    let locked = match find_toggles(&state) {
        Some(toggles) => apply_toggles(lockbox, &toggles),
        None => lockbox.is_locked(),
    };
    if locked {
        tracing::warn!("box remains locked");
    } else {
        tracing::debug!("box opened");
    }
    locked
}

/// Creates a randomly shuffled `rows` x `cols` box and unlocks it.
///
/// Returns `Ok(false)` on success, `Ok(true)` if the box remains locked.
///
/// # Errors
///
/// If the dimensions are invalid.
pub fn open_box(rows: usize, cols: usize) -> Result<bool, BoxError> {
    let mut lockbox = SecureBox::new(rows, cols)?;
    tracing::info!("seed: {}", lockbox.seed());
    Ok(unlock(&mut lockbox))
}

/// Same as [`open_box`] with a fixed shuffle seed.
///
/// # Errors
///
/// If the dimensions are invalid.
pub fn open_box_with_seed(rows: usize, cols: usize, seed: u64) -> Result<bool, BoxError> {
    let mut lockbox = SecureBox::with_seed(rows, cols, seed)?;
    Ok(unlock(&mut lockbox))
}

/// Sorts toggles in row-major order.
#[must_use]
pub fn sorted(toggles: &Toggles) -> Vec<Coord> {
    toggles.iter().copied().sorted_unstable().collect()
}
