//! Fixed-size worker pool partitioning the request budget.

use reqwest::Client;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::config::RunConfig;
use crate::error::AppResult;
use crate::metrics::RequestOutcome;

use super::executor;

/// Runs the full request budget across `config.concurrency` workers and
/// returns every collected outcome once all workers have finished.
///
/// Each worker executes `total_requests / concurrency` logical requests in
/// sequence; the remainder of an uneven budget is dropped (and logged).
/// Outcomes flow through a bounded channel sized to the whole budget, so
/// producers never block before the drain starts. The drain itself only
/// begins after every worker has been joined, which makes the final count
/// deterministic.
///
/// # Errors
///
/// Returns an error when a worker task panics or is cancelled. Request
/// failures are never errors here; they surface as outcomes.
pub async fn run_pool(config: &RunConfig, client: Client) -> AppResult<Vec<RequestOutcome>> {
    let share = config.requests_per_worker();
    let planned = config.planned_requests();
    let dropped = config.total_requests.saturating_sub(planned);
    if dropped > 0 {
        warn!(
            total = config.total_requests,
            concurrency = config.concurrency,
            dropped,
            "request budget does not divide evenly across workers; remainder dropped"
        );
    }
    debug!(
        workers = config.concurrency,
        per_worker = share,
        planned,
        "starting worker pool"
    );

    // Sized to the whole budget, clamped below tokio's permit ceiling.
    let capacity = usize::try_from(config.total_requests)
        .unwrap_or(usize::MAX)
        .clamp(1, usize::MAX >> 4);
    let (outcome_tx, mut outcome_rx) = mpsc::channel::<RequestOutcome>(capacity);

    let mut handles = Vec::with_capacity(config.concurrency);
    for _ in 0..config.concurrency {
        let outcome_tx = outcome_tx.clone();
        let client = client.clone();
        let url = config.target_url.clone();
        handles.push(tokio::spawn(async move {
            for _ in 0..share {
                let outcome = executor::execute(&client, &url).await;
                if outcome_tx.send(outcome).await.is_err() {
                    // The receiver lives until after the join barrier.
                    break;
                }
            }
        }));
    }
    drop(outcome_tx);

    // Join barrier: aggregation must not start before every worker is done.
    for handle in handles {
        handle.await?;
    }

    let mut outcomes = Vec::with_capacity(usize::try_from(planned).unwrap_or(0).min(capacity));
    while let Some(outcome) = outcome_rx.recv().await {
        outcomes.push(outcome);
    }
    Ok(outcomes)
}
