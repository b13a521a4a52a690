//! pagerank-linalg: Dense matrix support for the PageRank engine
//!
//! Provides a bounds-checked dense matrix with the arithmetic the
//! transition-matrix construction and power iteration rely on.

pub mod dense;
pub mod error;

pub use dense::{DenseMatrix, EQUALITY_TOLERANCE};
pub use error::LinalgError;
