//! Dense `f64` matrices with cofactor determinants, Gauss-Jordan reduction and inversion.
//!
//! Example
//! ```
//! use symcalc_matrix::Matrix;
//!
//! let m = Matrix::new(vec![vec![2.0, 3.0, 4.0], vec![7.0, 8.0, 3.0], vec![4.0, 7.0, 8.0]])?;
//! assert_eq!(m.det()?, 22.0);
//!
//! let reduced = Matrix::new(vec![vec![1.0, 2.0, 4.0], vec![2.0, 7.0, 8.0]])?.gauss_jordan_reduction();
//! assert_eq!(reduced.rows(), &[vec![1.0, 0.0, 4.0], vec![0.0, 1.0, 0.0]]);
//! # Ok::<(), symcalc_matrix::MatrixError>(())
//! ```

/// Error type shared by fallible matrix operations.
pub mod error;
/// The dense matrix type and its operations.
pub mod matrix;

pub use error::{MatrixError, MatrixResult};
pub use matrix::Matrix;
