//! pagerank: rank the pages of a connectivity matrix.
//!
//! CLI entry point using clap for argument parsing.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pagerank",
    version,
    about = "PageRank scores for a dense connectivity matrix",
    long_about = "Computes PageRank by damped power iteration.\n\
                  The input is a whitespace-separated N*N matrix where a non-zero\n\
                  entry at (row i, column j) means page j links to page i."
)]
struct Cli {
    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and print the rank of every page
    Rank(commands::rank::RankArgs),

    /// Print the damped transition matrix
    Transition(commands::transition::TransitionArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    tracing::info!("pagerank v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Rank(args) => commands::rank::run(args),
        Commands::Transition(args) => commands::transition::run(args),
    }
}
