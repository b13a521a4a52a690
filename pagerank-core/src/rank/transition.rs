//! Damped transition matrix construction.
//!
//! Column `j` of the connectivity matrix holds the out-links of node `j`
//! (row = destination). Each column is normalized to sum to one, dangling
//! columns become uniform, and the result is blended with the uniform
//! teleport matrix:
//!
//!   T = alpha * S + (1 - alpha) * U,   U[i][j] = 1/N

use pagerank_linalg::{DenseMatrix, LinalgError};
use tracing::debug;

/// Column-normalize a square connectivity matrix.
///
/// Columns summing to exactly zero are replaced by `1/N` in every row.
pub fn stochastic_matrix(connectivity: &DenseMatrix) -> Result<DenseMatrix, LinalgError> {
    let n = connectivity.nrows();
    let uniform = 1.0 / n as f64;
    let mut stochastic = DenseMatrix::square(n)?;
    let mut n_dangling = 0;

    for (col, col_sum) in connectivity.col_sums().into_iter().enumerate() {
        if col_sum == 0.0 {
            n_dangling += 1;
            for row in 0..n {
                stochastic.set(row, col, uniform)?;
            }
        } else {
            for row in 0..n {
                stochastic.set(row, col, connectivity.get(row, col)? / col_sum)?;
            }
        }
    }

    debug!("Normalized {} columns ({} dangling)", n, n_dangling);
    Ok(stochastic)
}

/// Build the damped transition matrix for `connectivity`.
pub fn transition_matrix(
    connectivity: &DenseMatrix,
    damping: f64,
) -> Result<DenseMatrix, LinalgError> {
    let n = connectivity.nrows();
    let stochastic = stochastic_matrix(connectivity)?;
    let teleport = DenseMatrix::full(n, n, 1.0 / n as f64)?;
    stochastic.scale(damping).add(&teleport.scale(1.0 - damping))
}
