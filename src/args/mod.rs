//! CLI argument types and parsing helpers.
mod types;


use std::time::Duration;

use clap::Parser;

pub use types::{PositiveU64, PositiveUsize};
use types::{parse_duration_arg, parse_positive_u64, parse_positive_usize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Concurrent HTTP load generator - fixed worker pool, exponential backoff on rate limiting, and an aggregate latency/status report."
)]
pub struct RunArgs {
    /// Target URL for the load run
    #[arg(long, short = 'u')]
    pub url: String,

    /// Total number of logical requests to issue
    #[arg(long, short = 'n', default_value = "100", value_parser = parse_positive_u64)]
    pub requests: PositiveU64,

    /// Number of concurrent workers
    #[arg(long, short = 'c', default_value = "10", value_parser = parse_positive_usize)]
    pub concurrency: PositiveUsize,

    /// Per-request timeout (supports ms/s/m/h, e.g. 500ms, 30s)
    #[arg(long, default_value = "30s", value_parser = parse_duration_arg)]
    pub timeout: Duration,

    /// Enable debug-level logging
    #[arg(long)]
    pub verbose: bool,
}
