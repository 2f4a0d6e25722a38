// The press of cell j is a linear map over GF(2); row i of the augmented
// system states that the presses reaching cell i must flip it exactly
// as often as its current value.

use crate::{bit_matrix::BitMatrix, error::LockedBoxError, grid::Dimensions};

fn check_shape(dims: Dimensions, state: &[Vec<bool>]) -> Result<(), LockedBoxError> {
    let ragged_row = state.iter().position(|row| row.len() != dims.x_size());
    if state.len() != dims.y_size() || ragged_row.is_some() {
        return Err(LockedBoxError::StateShapeMismatch {
            expected: dims,
            rows: state.len(),
            ragged_row,
        });
    }
    Ok(())
}

pub fn build_toggle_system(dims: Dimensions, state: &[Vec<bool>]) -> Result<BitMatrix, LockedBoxError> {
    check_shape(dims, state)?;
    let n = dims.cells();
    let (y_size, x_size) = (dims.y_size(), dims.x_size());
    let mut system = BitMatrix::zeroes(n, n + 1);
    for row in 0..y_size {
        for col in 0..x_size {
            let idx = dims.index(row, col);
            // the diagonal is hit three times: here, by the row and by the
            // column, which leaves it odd like every other affected cell
            system.set(idx, idx, true);
            for i in 0..x_size {
                system.flip(idx, dims.index(row, i));
            }
            for i in 0..y_size {
                system.flip(idx, dims.index(i, col));
            }
            system.set(idx, n, state[row][col]);
        }
    }
    Ok(system)
}
