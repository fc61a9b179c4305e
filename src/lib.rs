//! Unlocks a row/column toggle lock by solving a linear system over GF(2).
//!
//! Toggling `(r, c)` flips every cell in row `r` and every cell in column `c`.
//! Each cell gives one equation and each coordinate one unknown, so the set of
//! toggles that clears the grid is a solution of `A x = b` where `b` is the
//! current state.
#![warn(clippy::pedantic)]

#[macro_use]
mod internal;

pub mod common;
pub mod grid;
pub mod orientation;
pub mod securebox;
pub mod system;
pub mod unlock;

pub use common::{BoxError, Coord, Toggles, VerificationError};
pub use grid::Grid;
pub use securebox::{LockBox, SecureBox};
pub use unlock::{open_box, open_box_with_seed};
