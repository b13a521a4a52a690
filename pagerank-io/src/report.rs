//! Rank result rendering.
//!
//! Pages are labeled A, B, ..., Z, AA, AB, ... in connectivity order and
//! printed as percentages with two decimals.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use pagerank_core::{RankConfig, RankResult};

/// Spreadsheet-style label for a zero-based page index.
pub fn page_label(index: usize) -> String {
    let mut label = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        label.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    label.reverse();
    String::from_utf8_lossy(&label).into_owned()
}

/// One `Page <label>: <percent>%` line per score.
pub fn format_ranks(scores: &[f64]) -> String {
    scores
        .iter()
        .enumerate()
        .map(|(i, s)| format!("Page {}: {:.2}%\n", page_label(i), s * 100.0))
        .collect()
}

/// A labeled page score.
#[derive(Debug, Clone, Serialize)]
pub struct PageScore {
    pub label: String,
    pub score: f64,
}

/// Serializable summary of a rank computation.
#[derive(Debug, Clone, Serialize)]
pub struct RankReport {
    pub damping: f64,
    pub threshold: f64,
    pub iterations: usize,
    pub delta: f64,
    pub converged: bool,
    pub pages: Vec<PageScore>,
}

impl RankReport {
    pub fn new(result: &RankResult, config: &RankConfig) -> Self {
        let pages = result
            .scores
            .iter()
            .enumerate()
            .map(|(i, &score)| PageScore {
                label: page_label(i),
                score,
            })
            .collect();
        Self {
            damping: config.damping,
            threshold: config.threshold,
            iterations: result.iterations,
            delta: result.delta,
            converged: result.converged,
            pages,
        }
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write rank report: {}", path.display()))?;
        Ok(())
    }
}
