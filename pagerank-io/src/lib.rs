//! pagerank-io: Input and output around the PageRank engine
//!
//! Loads connectivity matrices from whitespace-separated text files and
//! renders rank results as labeled percentages or JSON.

pub mod connectivity;
pub mod report;

pub use connectivity::{parse_connectivity, read_connectivity_file};
pub use report::{format_ranks, page_label, RankReport};
