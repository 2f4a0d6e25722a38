use bitvec::prelude::*;
use itertools::Itertools;
use rand::Rng;

use crate::error::LockedBoxError;

use super::{Dimensions, ToggleGrid};

const MAX_SHUFFLE_TOGGLES: u32 = 1000;

/// In-memory locked box. `true` cells are locked.
pub struct SecureBox {
    dimensions: Dimensions,
    rows: Vec<BitVec>,
}

impl SecureBox {
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            rows: (0..dimensions.y_size())
                .map(|_| bitvec![usize, Lsb0; 0; dimensions.x_size()])
                .collect(),
        }
    }

    /// Locks the box with a random run of toggles, so the resulting state is
    /// always one the toggle rule can undo.
    pub fn shuffled<R: Rng>(dimensions: Dimensions, rng: &mut R) -> Self {
        let mut secure_box = Self::new(dimensions);
        let toggles = rng.gen_range(0..MAX_SHUFFLE_TOGGLES);
        for _ in 0..toggles {
            let row = rng.gen_range(0..dimensions.y_size());
            let col = rng.gen_range(0..dimensions.x_size());
            secure_box.toggle(row, col);
        }
        log::debug!("shuffled {dimensions} box with {toggles} toggles");
        secure_box
    }

    /// Takes an arbitrary state, including ones no toggle sequence reaches.
    pub fn from_state(state: Vec<Vec<bool>>) -> Result<Self, LockedBoxError> {
        let width = state.first().map(Vec::len).unwrap_or(0);
        let dimensions = Dimensions::new(state.len(), width)?;
        if let Some((ragged_row, _)) = state.iter().find_position(|row| row.len() != width) {
            return Err(LockedBoxError::StateShapeMismatch {
                expected: dimensions,
                rows: state.len(),
                ragged_row: Some(ragged_row),
            });
        }
        let rows = state
            .into_iter()
            .map(|row| row.into_iter().collect::<BitVec>())
            .collect();
        Ok(Self { dimensions, rows })
    }
}

impl ToggleGrid for SecureBox {
    fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    fn toggle(&mut self, row: usize, col: usize) {
        let flipped = !self.rows[row][col];
        self.rows[row].set(col, flipped);
        for mut cell in self.rows[row].iter_mut() {
            *cell = !*cell;
        }
        for r in self.rows.iter_mut() {
            let flipped = !r[col];
            r.set(col, flipped);
        }
    }

    fn state(&self) -> Vec<Vec<bool>> {
        self.rows
            .iter()
            .map(|row| row.iter().by_vals().collect_vec())
            .collect_vec()
    }

    fn is_locked(&self) -> bool {
        self.rows.iter().any(|row| row.any())
    }
}
