//! Power-iteration PageRank over a dense connectivity matrix.
//!
//! The engine owns the connectivity matrix and rebuilds the transition
//! matrix at the start of every computation, then repeatedly applies it
//! to the rank vector until no entry moves by more than the threshold.

use pagerank_linalg::DenseMatrix;
use tracing::{debug, info, warn};

use super::transition::transition_matrix;
use super::{RankConfig, RankResult};
use crate::error::RankError;

/// PageRank engine for a fixed graph.
#[derive(Debug, Clone)]
pub struct RankEngine {
    connectivity: DenseMatrix,
    transition: Option<DenseMatrix>,
    config: RankConfig,
}

impl RankEngine {
    /// Create an engine for a square connectivity matrix.
    ///
    /// `connectivity[row][col] != 0` means node `col` links to node `row`.
    /// Every entry and every column sum must be finite.
    pub fn new(connectivity: DenseMatrix, config: RankConfig) -> Result<Self, RankError> {
        if !connectivity.is_square() {
            return Err(RankError::NotSquare {
                rows: connectivity.nrows(),
                cols: connectivity.ncols(),
            });
        }
        check_finite(&connectivity)?;
        config.validate()?;
        Ok(Self {
            connectivity,
            transition: None,
            config,
        })
    }

    /// Create an engine with the default damping and threshold.
    pub fn with_defaults(connectivity: DenseMatrix) -> Result<Self, RankError> {
        Self::new(connectivity, RankConfig::default())
    }

    /// Number of ranked nodes.
    pub fn n_nodes(&self) -> usize {
        self.connectivity.nrows()
    }

    pub fn connectivity(&self) -> &DenseMatrix {
        &self.connectivity
    }

    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// Transition matrix built by the most recent [`compute_ranks`](Self::compute_ranks).
    pub fn transition_matrix(&self) -> Option<&DenseMatrix> {
        self.transition.as_ref()
    }

    /// Build the damped transition matrix for the current graph.
    pub fn build_transition_matrix(&self) -> Result<DenseMatrix, RankError> {
        Ok(transition_matrix(&self.connectivity, self.config.damping)?)
    }

    /// Run power iteration to a fixed point.
    ///
    /// Starts from a vector of ones and returns the converged vector
    /// normalized to sum to one. Fails with [`RankError::NotConverged`] if
    /// the iteration cap is reached first, so an `Ok` result always has
    /// `converged == true`.
    pub fn compute_ranks(&mut self) -> Result<RankResult, RankError> {
        let transition = self.build_transition_matrix()?;
        let n = self.n_nodes();
        let threshold = self.config.threshold;

        info!(
            "Starting power iteration with n={}, damping={}, threshold={}",
            n, self.config.damping, threshold
        );

        let mut rank = vec![1.0; n];
        let mut delta = f64::INFINITY;
        let mut iterations = 0;

        loop {
            if let Some(max_iter) = self.config.max_iterations {
                if iterations >= max_iter {
                    warn!(
                        "Power iteration stopped after {} iterations (delta={:.2e})",
                        iterations, delta
                    );
                    self.transition = Some(transition);
                    return Err(RankError::NotConverged { iterations, delta });
                }
            }

            let next = transition.mat_vec(&rank)?;
            iterations += 1;
            delta = max_abs_diff(&next, &rank);
            rank = next;
            debug!("Iteration {}: delta={:.6e}", iterations, delta);

            if delta <= threshold {
                break;
            }
        }

        let sum: f64 = rank.iter().sum();
        for r in &mut rank {
            *r /= sum;
        }

        info!("Converged after {} iterations (delta={:.2e})", iterations, delta);
        self.transition = Some(transition);
        Ok(RankResult::new(rank, iterations, delta, true))
    }
}

/// Reject non-finite entries and columns whose sum overflows.
fn check_finite(connectivity: &DenseMatrix) -> Result<(), RankError> {
    for (col, col_sum) in connectivity.col_sums().into_iter().enumerate() {
        if col_sum.is_finite() {
            continue;
        }
        for row in 0..connectivity.nrows() {
            if !connectivity.get(row, col)?.is_finite() {
                return Err(RankError::NonFiniteConnectivity { row, col });
            }
        }
        return Err(RankError::ColumnSumOverflow { col });
    }
    Ok(())
}

/// Largest absolute element-wise difference between two equal-length vectors.
///
/// NaN propagates, so a NaN iterate never counts as converged.
fn max_abs_diff(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, |acc, d| if d.is_nan() || d > acc { d } else { acc })
}
