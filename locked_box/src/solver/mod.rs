pub mod open_box;
pub mod toggle_system;

pub use open_box::{apply_presses, open_box, solve_and_open, solve_and_open_with_rng, solve_presses};
pub use toggle_system::build_toggle_system;
