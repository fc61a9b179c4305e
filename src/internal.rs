//! Internal modules.

pub mod gf2_linalg;
#[cfg(test)]
#[macro_use]
pub mod test_utils;
pub mod utils;
pub mod validate;
