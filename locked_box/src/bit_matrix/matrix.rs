use bitvec::prelude::*;

pub struct BitMatrix {
    pub number_of_columns: usize,
    pub rows: Vec<BitVec>,
}

impl BitMatrix {
    pub fn zeroes(rows: usize, cols: usize) -> Self {
        Self {
            number_of_columns: cols,
            rows: (0..rows).map(|_| bitvec![usize, Lsb0; 0; cols]).collect(),
        }
    }

    pub fn number_of_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, r: usize, c: usize) -> bool {
        self.rows[r][c]
    }

    pub fn set(&mut self, r: usize, c: usize, v: bool) {
        self.rows[r].set(c, v)
    }

    pub fn flip(&mut self, r: usize, c: usize) {
        let flip_val = !self.rows[r][c];
        self.rows[r].set(c, flip_val)
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.rows.swap(a, b);
    }

    /// `rows[target] ^= rows[source]`, one machine word at a time. Every row
    /// has the same length and zeroed spare bits, so the raw words line up.
    pub fn xor_row_into(&mut self, source: usize, target: usize) {
        debug_assert_ne!(source, target);
        let (src, dst) = if source < target {
            let (head, tail) = self.rows.split_at_mut(target);
            (&head[source], &mut tail[0])
        } else {
            let (head, tail) = self.rows.split_at_mut(source);
            (&tail[0], &mut head[target])
        };
        for (d, s) in dst.as_raw_mut_slice().iter_mut().zip(src.as_raw_slice()) {
            *d ^= *s;
        }
    }
}
