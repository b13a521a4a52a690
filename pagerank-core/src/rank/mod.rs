//! PageRank configuration, results and the power-iteration engine.

pub mod engine;
pub mod transition;

use serde::{Deserialize, Serialize};

use crate::error::RankError;

/// Tunable parameters of a rank computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Probability of following an out-link rather than teleporting.
    pub damping: f64,
    /// Largest per-node change between iterations that counts as converged.
    pub threshold: f64,
    /// Iteration cap. `None` iterates until the threshold is met.
    pub max_iterations: Option<usize>,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            threshold: 0.001,
            max_iterations: Some(10_000),
        }
    }
}

impl RankConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the convergence threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set (or remove, with `None`) the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: Option<usize>) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Check that every parameter is in range.
    pub fn validate(&self) -> Result<(), RankError> {
        if self.damping.is_nan() || self.damping <= 0.0 || self.damping > 1.0 {
            return Err(RankError::InvalidDamping(self.damping));
        }
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(RankError::InvalidThreshold(self.threshold));
        }
        if self.max_iterations == Some(0) {
            return Err(RankError::InvalidMaxIterations);
        }
        Ok(())
    }
}

/// Result of a converged rank computation.
///
/// Runs that hit the iteration cap surface as [`RankError::NotConverged`]
/// rather than a result, so `converged` is `true` for every value returned
/// by [`engine::RankEngine::compute_ranks`]. The field is kept so exported
/// reports state it explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankResult {
    /// Score per node, in connectivity-matrix order, summing to 1.
    pub scores: Vec<f64>,
    /// Number of matrix-vector products performed.
    pub iterations: usize,
    /// Largest per-node change in the final iteration.
    pub delta: f64,
    /// Whether the threshold was met. Always `true` from the engine.
    pub converged: bool,
}

impl RankResult {
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Number of ranked nodes.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Get the score for a specific node.
    pub fn score(&self, node: usize) -> Option<f64> {
        self.scores.get(node).copied()
    }

    /// Get the top `n` nodes by descending score. Ties keep node order.
    pub fn top_n(&self, n: usize) -> Vec<(usize, f64)> {
        let mut indexed: Vec<_> = self.scores.iter().copied().enumerate().collect();
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1));
        indexed.truncate(n);
        indexed
    }
}
