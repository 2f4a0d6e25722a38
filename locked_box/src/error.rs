use thiserror::Error;

use crate::grid::Dimensions;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LockedBoxError {
    #[error(
        "invalid box dimensions {y_size}x{x_size}: both sides must be non-zero \
         and the box may hold at most {max_cells} cells"
    )]
    InvalidDimensions {
        y_size: usize,
        x_size: usize,
        max_cells: usize,
    },
    #[error(
        "box state does not match {expected}: got {rows} rows{}",
        .ragged_row.map(|r| format!(", row {r} has the wrong width")).unwrap_or_default()
    )]
    StateShapeMismatch {
        expected: Dimensions,
        rows: usize,
        ragged_row: Option<usize>,
    },
    // the row/column toggle family only reaches states in the column
    // space of its coefficient matrix
    #[error("{inconsistent_equations} equations of the toggle system have no solution")]
    StructuralAssumptionViolation { inconsistent_equations: usize },
}
