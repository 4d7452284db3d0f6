use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    #[error("Row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("The {operation} operation is only valid for square matrices (got {m}x{n})")]
    NotSquare {
        operation: &'static str,
        m: usize,
        n: usize,
    },

    #[error("Matrix is singular and has no inverse")]
    Singular,
}

pub type MatrixResult<T> = Result<T, MatrixError>;
