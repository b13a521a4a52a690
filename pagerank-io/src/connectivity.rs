//! Connectivity matrix reader.
//!
//! The file is a stream of floats separated by any whitespace. Its length
//! must be a perfect square N*N; value `i * N + j` becomes `C[i][j]`,
//! where a non-zero `C[i][j]` means page `j` links to page `i`.

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;

use pagerank_linalg::DenseMatrix;

/// Parse connectivity values from a string.
pub fn parse_connectivity(contents: &str) -> Result<DenseMatrix> {
    let mut values = Vec::new();
    for (idx, token) in contents.split_whitespace().enumerate() {
        let value: f64 = token
            .parse()
            .with_context(|| format!("Invalid connectivity value {:?} at position {}", token, idx))?;
        if !value.is_finite() {
            bail!("Non-finite connectivity value {:?} at position {}", token, idx);
        }
        values.push(value);
    }

    if values.is_empty() {
        bail!("Connectivity input contains no values");
    }

    let matrix = DenseMatrix::from_flat(&values)?;
    Ok(matrix)
}

/// Read a connectivity matrix from a text file.
pub fn read_connectivity_file(path: &Path) -> Result<DenseMatrix> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read connectivity file: {}", path.display()))?;
    let matrix = parse_connectivity(&contents)
        .with_context(|| format!("Malformed connectivity file: {}", path.display()))?;
    info!(
        "Loaded {}x{} connectivity matrix from {}",
        matrix.nrows(),
        matrix.ncols(),
        path.display()
    );
    Ok(matrix)
}
