//! Outcome collection and aggregation into the final run report.
mod report;


use std::collections::BTreeMap;
use std::time::Duration;

pub use report::print_report;

const STATUS_OK: u16 = 200;

/// Final result of one logical request, produced exactly once after the
/// retry engine reaches a terminal status or exhausts its attempts. Owned
/// by the worker that produced it until it crosses the outcome channel.
#[derive(Debug, Clone)]
pub struct RequestOutcome {
    /// Numeric HTTP status, or 0 when no response arrived at all.
    pub status: u16,
    /// Transport error text, when the final attempt failed below HTTP.
    pub error: Option<String>,
    /// Round-trip time of the final attempt.
    pub latency: Duration,
}

impl RequestOutcome {
    #[must_use]
    pub const fn new(status: u16, error: Option<String>, latency: Duration) -> Self {
        Self {
            status,
            error,
            latency,
        }
    }
}

/// Aggregate view of a finished run. Built once, after the pool's join
/// barrier, from the complete set of outcomes.
#[derive(Debug)]
pub struct RunReport {
    pub total_time: Duration,
    pub total_requests: u64,
    pub success_count: u64,
    /// Status code -> count, over outcomes that produced a response.
    pub histogram: BTreeMap<u16, u64>,
    pub min_latency_ms: u64,
    pub avg_latency_ms: u64,
    pub max_latency_ms: u64,
}

#[must_use]
pub fn aggregate(total_time: Duration, outcomes: &[RequestOutcome]) -> RunReport {
    let mut histogram: BTreeMap<u16, u64> = BTreeMap::new();
    let mut min_ms = u64::MAX;
    let mut max_ms = 0u64;
    let mut sum_ms: u128 = 0;
    let mut responded: u64 = 0;

    for outcome in outcomes {
        if outcome.error.is_some() {
            // Transport failures count toward the total but carry no
            // status worth tallying.
            continue;
        }
        let count = histogram.entry(outcome.status).or_insert(0);
        *count = count.saturating_add(1);

        let latency_ms = u64::try_from(outcome.latency.as_millis()).unwrap_or(u64::MAX);
        min_ms = min_ms.min(latency_ms);
        max_ms = max_ms.max(latency_ms);
        sum_ms = sum_ms.saturating_add(u128::from(latency_ms));
        responded = responded.saturating_add(1);
    }

    let success_count = histogram.get(&STATUS_OK).copied().unwrap_or(0);
    let avg_latency_ms = sum_ms
        .checked_div(u128::from(responded))
        .map_or(0, |avg| u64::try_from(avg).unwrap_or(u64::MAX));

    RunReport {
        total_time,
        total_requests: u64::try_from(outcomes.len()).unwrap_or(u64::MAX),
        success_count,
        histogram,
        min_latency_ms: if responded == 0 { 0 } else { min_ms },
        avg_latency_ms,
        max_latency_ms: max_ms,
    }
}
