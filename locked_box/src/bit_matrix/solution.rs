use bitvec::prelude::*;

use crate::error::LockedBoxError;

use super::gauss_jordan::GaussJordan;

/// Assignment of the unknowns of a reduced system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub presses: BitVec,
    pub free_variables: usize,
    pub inconsistent_equations: usize,
}

impl Solution {
    /// Reads the assignment off a system already in reduced echelon form.
    /// Pivot unknowns take their row's right-hand side and free unknowns are
    /// left at zero, which is exact whenever the system is consistent.
    pub fn read_from(gj: &GaussJordan) -> Self {
        let n = gj.last_col_idx;
        let mut presses = bitvec![usize, Lsb0; 0; n];
        for (row, &col) in gj.pivot_columns.iter().enumerate() {
            presses.set(col, gj.right_hand_side(row));
        }
        Self {
            presses,
            free_variables: n - gj.rank,
            inconsistent_equations: gj.inconsistent_rows(),
        }
    }

    pub fn check_exact(&self) -> Result<(), LockedBoxError> {
        if self.inconsistent_equations == 0 {
            Ok(())
        } else {
            Err(LockedBoxError::StructuralAssumptionViolation {
                inconsistent_equations: self.inconsistent_equations,
            })
        }
    }

    pub fn number_of_presses(&self) -> usize {
        self.presses.count_ones()
    }
}

#[cfg(test)]
mod test {
    use crate::bit_matrix::{matrix::BitMatrix, satisfies_system::satisfies_system};

    use super::*;

    fn solve(rows: Vec<Vec<usize>>, cols: usize) -> (BitMatrix, Solution) {
        let mut matrix = BitMatrix::zeroes(rows.len(), cols);
        let mut copy = BitMatrix::zeroes(rows.len(), cols);
        for (ridx, r) in rows.iter().enumerate() {
            for cidx in r {
                matrix.set(ridx, *cidx, true);
                copy.set(ridx, *cidx, true);
            }
        }
        let mut gj = GaussJordan::from_augmented_system(matrix);
        gj.go_to_reduced_echelon_form();
        (copy, Solution::read_from(&gj))
    }

    #[test]
    fn consistent_singular_system() {
        // [0, 1, 0, 1 | 1]
        // [1, 1, 0, 0 | 1]
        // [0, 0, 1, 0 | 0]
        // [1, 0, 0, 1 | 0]
        let (system, solution) = solve(
            vec![vec![1, 3, 4], vec![0, 1, 4], vec![2], vec![0, 3]],
            5,
        );
        assert_eq!(solution.free_variables, 1);
        assert!(solution.check_exact().is_ok());
        assert!(satisfies_system(&system, &solution.presses));
    }

    #[test]
    fn free_variables_stay_unpressed() {
        let (system, solution) = solve(vec![vec![0, 1, 2], vec![0, 1, 2]], 3);
        assert_eq!(&solution.presses, &bits![1, 0].to_bitvec());
        assert_eq!(solution.free_variables, 1);
        assert_eq!(solution.number_of_presses(), 1);
        assert!(satisfies_system(&system, &solution.presses));
    }

    #[test]
    fn report_inconsistent_system() {
        let (system, solution) = solve(vec![vec![0, 1, 2], vec![0, 1]], 3);
        assert_eq!(
            solution.check_exact(),
            Err(LockedBoxError::StructuralAssumptionViolation {
                inconsistent_equations: 1
            })
        );
        assert!(!satisfies_system(&system, &solution.presses));
    }
}
