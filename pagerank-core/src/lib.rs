//! pagerank-core: PageRank over a dense connectivity matrix
//!
//! Builds the damped, column-stochastic transition matrix from a
//! connectivity matrix and runs power iteration until the rank vector
//! stops changing by more than the configured threshold.

pub mod error;
pub mod rank;

pub use error::RankError;
pub use rank::engine::RankEngine;
pub use rank::{RankConfig, RankResult};
