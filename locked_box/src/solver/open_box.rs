use std::time::Instant;

use rand::Rng;

use crate::{
    bit_matrix::{GaussJordan, Solution},
    error::LockedBoxError,
    grid::{Dimensions, SecureBox, ToggleGrid},
};

use super::toggle_system::build_toggle_system;

pub fn solve_presses(dims: Dimensions, state: &[Vec<bool>]) -> Result<Solution, LockedBoxError> {
    let start = Instant::now();
    let system = build_toggle_system(dims, state)?;
    let mut gj = GaussJordan::from_augmented_system(system);
    gj.go_to_reduced_echelon_form();
    let solution = Solution::read_from(&gj);
    log::debug!(
        "solved {dims} toggle system: {} unknowns, rank {}, {} free, in {:#?}",
        dims.cells(),
        gj.rank,
        solution.free_variables,
        start.elapsed()
    );
    Ok(solution)
}

pub fn apply_presses<G: ToggleGrid + ?Sized>(grid: &mut G, solution: &Solution) {
    let dims = grid.dimensions();
    for idx in solution.presses.iter_ones() {
        let (row, col) = dims.position(idx);
        log::trace!("pressing ({row}, {col})");
        grid.toggle(row, col);
    }
}

/// Presses whatever the grid needs to unlock and returns whether it is
/// still locked afterwards.
pub fn open_box<G: ToggleGrid + ?Sized>(grid: &mut G) -> Result<bool, LockedBoxError> {
    let dims = grid.dimensions();
    let state = grid.state();
    let solution = solve_presses(dims, &state)?;
    if let Err(err) = solution.check_exact() {
        log::warn!("{err}; applying best-effort presses");
    }
    apply_presses(grid, &solution);
    log::debug!("applied {} presses", solution.number_of_presses());
    Ok(grid.is_locked())
}

pub fn solve_and_open_with_rng<R: Rng>(
    y_size: usize,
    x_size: usize,
    rng: &mut R,
) -> Result<bool, LockedBoxError> {
    let dims = Dimensions::new(y_size, x_size)?;
    let mut secure_box = SecureBox::shuffled(dims, rng);
    open_box(&mut secure_box)
}

pub fn solve_and_open(y_size: usize, x_size: usize) -> Result<bool, LockedBoxError> {
    solve_and_open_with_rng(y_size, x_size, &mut rand::thread_rng())
}
