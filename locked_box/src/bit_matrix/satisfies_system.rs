use bitvec::prelude::*;

use super::matrix::BitMatrix;

/// Checks `A x = b` for an augmented system `[A | b]`.
pub fn satisfies_system(augmented: &BitMatrix, x: &BitVec) -> bool {
    let n = augmented.number_of_columns - 1;
    debug_assert_eq!(x.len(), n);
    augmented.rows.iter().all(|row| {
        // parity of the overlap between the row and x
        let parity = row[..n].iter_ones().filter(|&j| x[j]).count() % 2 == 1;
        parity == row[n]
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn overlap_parity_matches_rhs() {
        let mut system = BitMatrix::zeroes(2, 4);
        // x0 + x1 + x2 = 0, x2 = 1
        for c in [0, 1, 2] {
            system.set(0, c, true);
        }
        system.set(1, 2, true);
        system.set(1, 3, true);
        assert!(satisfies_system(&system, &bits![1, 0, 1].to_bitvec()));
        assert!(satisfies_system(&system, &bits![0, 1, 1].to_bitvec()));
        assert!(!satisfies_system(&system, &bits![0, 0, 1].to_bitvec()));
        assert!(!satisfies_system(&system, &bits![0, 0, 0].to_bitvec()));
    }
}
