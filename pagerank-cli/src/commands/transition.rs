//! Print the damped transition matrix.
//!
//! pagerank transition --connectivity-file ... --damping 0.85

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use pagerank_core::{RankConfig, RankEngine};
use pagerank_io::read_connectivity_file;

#[derive(Args)]
pub struct TransitionArgs {
    /// Connectivity matrix file (whitespace-separated, N*N values)
    #[arg(long, default_value = "connectivity.txt")]
    connectivity_file: PathBuf,

    /// Probability of following a link instead of teleporting
    #[arg(long, default_value = "0.85")]
    damping: f64,
}

pub fn run(args: TransitionArgs) -> Result<()> {
    let connectivity = read_connectivity_file(&args.connectivity_file)?;
    let engine = RankEngine::new(connectivity, RankConfig::new().with_damping(args.damping))?;
    let transition = engine.build_transition_matrix()?;
    print!("{}", transition);
    Ok(())
}
