use super::matrix::BitMatrix;

/// Gauss-Jordan elimination over GF(2) on an augmented system `[A | b]`,
/// where the last column holds `b`.
pub struct GaussJordan {
    pub system: BitMatrix,
    pub last_col_idx: usize,
    active_column: usize,
    pivot_row: usize,
    // pivot_columns[r] is the leading column of row r, for r < rank
    pub pivot_columns: Vec<usize>,
    pub rank: usize,
}

impl GaussJordan {
    pub fn from_augmented_system(system: BitMatrix) -> Self {
        debug_assert!(system.number_of_columns > 0);
        let last_col_idx = system.number_of_columns - 1;
        Self {
            system,
            last_col_idx,
            active_column: 0,
            pivot_row: 0,
            pivot_columns: Vec::with_capacity(last_col_idx),
            rank: 0,
        }
    }

    /// Leaves every pivot column with a single 1, in its pivot row. Rows
    /// below `rank` are zero on the coefficient side.
    pub fn go_to_reduced_echelon_form(&mut self) {
        while self.is_not_in_reduced_form() {
            self.pivot_active_column();
            self.go_to_next_column();
        }
        self.rank = self.pivot_row;
    }

    fn is_not_in_reduced_form(&self) -> bool {
        self.active_column < self.last_col_idx && self.pivot_row < self.system.number_of_rows()
    }

    fn pivot_active_column(&mut self) {
        // a column without a pivot is a free unknown
        if let Some(found) = self.find_pivot() {
            self.system.swap_rows(self.pivot_row, found);
            self.eliminate_active_column();
            self.pivot_columns.push(self.active_column);
            self.pivot_row += 1;
        }
    }

    fn find_pivot(&self) -> Option<usize> {
        (self.pivot_row..self.system.number_of_rows())
            .find(|&row_index| self.system.get(row_index, self.active_column))
    }

    fn eliminate_active_column(&mut self) {
        for row_index in 0..self.system.number_of_rows() {
            if row_index != self.pivot_row && self.system.get(row_index, self.active_column) {
                self.system.xor_row_into(self.pivot_row, row_index);
            }
        }
    }

    fn go_to_next_column(&mut self) {
        self.active_column += 1;
    }

    pub fn right_hand_side(&self, row: usize) -> bool {
        self.system.get(row, self.last_col_idx)
    }

    /// Equations that reduced to `0 = 1`.
    pub fn inconsistent_rows(&self) -> usize {
        (self.rank..self.system.number_of_rows())
            .filter(|&row| self.right_hand_side(row))
            .count()
    }
}
