//! Errors raised while configuring or running a rank computation.

use pagerank_linalg::LinalgError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RankError {
    #[error("Connectivity matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("Connectivity value at ({row}, {col}) is not finite")]
    NonFiniteConnectivity { row: usize, col: usize },

    #[error("Out-link weights of column {col} overflow when summed")]
    ColumnSumOverflow { col: usize },

    #[error("Damping factor must be in (0, 1], got {0}")]
    InvalidDamping(f64),

    #[error("Convergence threshold must be finite and positive, got {0}")]
    InvalidThreshold(f64),

    #[error("Maximum iteration count must be at least 1")]
    InvalidMaxIterations,

    #[error("Power iteration did not converge after {iterations} iterations (delta: {delta:.2e})")]
    NotConverged { iterations: usize, delta: f64 },

    #[error(transparent)]
    Linalg(#[from] LinalgError),
}
