pub mod dimensions;
pub mod secure_box;

pub use dimensions::{Dimensions, MAX_CELLS};
pub use secure_box::SecureBox;

/// The grid the solver drives. It only ever reads a snapshot, presses
/// cells, and asks whether anything is still locked.
pub trait ToggleGrid {
    fn dimensions(&self) -> Dimensions;

    /// Flips `(row, col)` together with every other cell of its row and
    /// column.
    fn toggle(&mut self, row: usize, col: usize);

    fn state(&self) -> Vec<Vec<bool>>;

    /// `true` while any cell is set.
    fn is_locked(&self) -> bool;
}
