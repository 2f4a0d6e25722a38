pub mod gauss_jordan;
pub mod matrix;
pub mod satisfies_system;
pub mod solution;

pub use gauss_jordan::GaussJordan;
pub use matrix::BitMatrix;
pub use satisfies_system::satisfies_system;
pub use solution::Solution;
