//! Compute page ranks.
//!
//! pagerank rank --connectivity-file ... --damping 0.85 --threshold 0.001

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use pagerank_core::{RankConfig, RankEngine};
use pagerank_io::{format_ranks, read_connectivity_file, RankReport};

#[derive(Args)]
pub struct RankArgs {
    /// Connectivity matrix file (whitespace-separated, N*N values)
    #[arg(long, default_value = "connectivity.txt")]
    connectivity_file: PathBuf,

    /// Probability of following a link instead of teleporting
    #[arg(long, default_value = "0.85")]
    damping: f64,

    /// Largest per-page change that counts as converged
    #[arg(long, default_value = "0.001")]
    threshold: f64,

    /// Maximum power iterations before giving up
    #[arg(long, default_value = "10000", conflicts_with = "unbounded")]
    max_iter: usize,

    /// Iterate until convergence with no iteration cap
    #[arg(long, default_value = "false")]
    unbounded: bool,

    /// Also write the ranks as JSON to this path
    #[arg(long)]
    json_out: Option<PathBuf>,
}

pub fn run(args: RankArgs) -> Result<()> {
    let max_iterations = if args.unbounded {
        None
    } else {
        Some(args.max_iter)
    };
    let config = RankConfig::new()
        .with_damping(args.damping)
        .with_threshold(args.threshold)
        .with_max_iterations(max_iterations);

    let connectivity = read_connectivity_file(&args.connectivity_file)?;
    let mut engine = RankEngine::new(connectivity, config)?;
    let result = engine.compute_ranks()?;
    info!(
        "Ranked {} pages in {} iterations",
        result.len(),
        result.iterations
    );

    print!("{}", format_ranks(&result.scores));

    if let Some(path) = &args.json_out {
        RankReport::new(&result, engine.config()).write_json(path)?;
        info!("Wrote JSON report to {}", path.display());
    }

    Ok(())
}
