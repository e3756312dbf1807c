//! Executes one logical request: a GET plus retries under the backoff
//! policy, yielding exactly one [`RequestOutcome`].

use reqwest::Client;
use tokio::time::{Instant, sleep};
use tracing::debug;
use url::Url;

use crate::metrics::RequestOutcome;

use super::backoff::{self, Backoff, STATUS_TRANSPORT_FAILURE};

/// Runs one logical request to completion.
///
/// Terminal as soon as the response status is anything other than 429 or a
/// transport failure; otherwise sleeps per [`Backoff`] and tries again.
/// When the attempt ceiling is reached the last observed outcome is
/// returned as final; exhaustion is not an error of its own.
pub(super) async fn execute(client: &Client, url: &Url) -> RequestOutcome {
    let mut backoff = Backoff::new();

    loop {
        let outcome = attempt(client, url).await;
        if !backoff::is_retryable(outcome.status) {
            return outcome;
        }
        match backoff.next_delay() {
            Some(delay) => {
                debug!(
                    status = outcome.status,
                    next_attempt = backoff.attempt(),
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    "retrying request"
                );
                sleep(delay).await;
            }
            None => return outcome,
        }
    }
}

async fn attempt(client: &Client, url: &Url) -> RequestOutcome {
    let start = Instant::now();
    match client.get(url.clone()).send().await {
        Ok(response) => {
            let status = response.status().as_u16();
            // Dropping the response releases the connection back to the
            // pool; the body is never held across retries.
            drop(response);
            RequestOutcome::new(status, None, start.elapsed())
        }
        Err(err) => {
            debug!("request failed: {}", err);
            RequestOutcome::new(STATUS_TRANSPORT_FAILURE, Some(err.to_string()), start.elapsed())
        }
    }
}
