//! Error type shared by every matrix operation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    #[error("Matrix dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("Input length {len} has no integer square root")]
    NotPerfectSquare { len: usize },

    #[error("Expected {expected} values for the requested shape, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("Index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Dimension mismatch in {op}: {left_rows}x{left_cols} vs {right_rows}x{right_cols}")]
    DimensionMismatch {
        op: &'static str,
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },
}
