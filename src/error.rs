//! Error types for densr

use thiserror::Error;

/// Result type alias using densr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in densr operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Shape mismatch in an operation
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Diagonal entry too small to serve as a relaxation pivot
    #[error("Singular pivot: |A[{row},{row}]| = {value:e} is not a usable divisor")]
    SingularPivot {
        /// Row of the offending diagonal entry
        row: usize,
        /// Value found on the diagonal
        value: f64,
    },
}
