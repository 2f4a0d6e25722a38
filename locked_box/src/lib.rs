pub mod bit_matrix;
pub mod error;
pub mod grid;
pub mod solver;

pub use error::LockedBoxError;
pub use grid::{Dimensions, SecureBox, ToggleGrid, MAX_CELLS};
pub use solver::{open_box, solve_and_open, solve_and_open_with_rng};
