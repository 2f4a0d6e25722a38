use std::fmt;

use crate::error::LockedBoxError;

// 100 x 100; the augmented system needs N * (N + 1) bits
pub const MAX_CELLS: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    y_size: usize,
    x_size: usize,
}

impl Dimensions {
    pub fn new(y_size: usize, x_size: usize) -> Result<Self, LockedBoxError> {
        let invalid = LockedBoxError::InvalidDimensions {
            y_size,
            x_size,
            max_cells: MAX_CELLS,
        };
        if y_size == 0 || x_size == 0 {
            return Err(invalid);
        }
        match y_size.checked_mul(x_size) {
            Some(cells) if cells <= MAX_CELLS => Ok(Self { y_size, x_size }),
            _ => Err(invalid),
        }
    }

    pub fn y_size(&self) -> usize {
        self.y_size
    }

    pub fn x_size(&self) -> usize {
        self.x_size
    }

    pub fn cells(&self) -> usize {
        self.y_size * self.x_size
    }

    /// Row-major index of `(row, col)`.
    pub fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.y_size && col < self.x_size);
        row * self.x_size + col
    }

    pub fn position(&self, index: usize) -> (usize, usize) {
        debug_assert!(index < self.cells());
        (index / self.x_size, index % self.x_size)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.y_size, self.x_size)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_empty_sides() {
        assert!(matches!(
            Dimensions::new(0, 4),
            Err(LockedBoxError::InvalidDimensions { y_size: 0, x_size: 4, .. })
        ));
        assert!(Dimensions::new(4, 0).is_err());
    }

    #[test]
    fn rejects_more_than_max_cells() {
        assert!(Dimensions::new(100, 100).is_ok());
        assert!(Dimensions::new(1, MAX_CELLS).is_ok());
        assert!(Dimensions::new(100, 101).is_err());
        assert!(Dimensions::new(usize::MAX, 2).is_err());
    }

    #[test]
    fn index_and_position_are_row_major() {
        let dims = Dimensions::new(3, 4).unwrap();
        assert_eq!(dims.cells(), 12);
        assert_eq!(dims.index(0, 3), 3);
        assert_eq!(dims.index(2, 1), 9);
        for idx in 0..dims.cells() {
            let (row, col) = dims.position(idx);
            assert_eq!(dims.index(row, col), idx);
        }
        assert_eq!(dims.to_string(), "3x4");
    }
}
