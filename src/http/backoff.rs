//! Retry/backoff policy for a single logical request.
//!
//! Pure state, no I/O: the executor asks for the next delay and sleeps on
//! its own. Transport failures (status 0) retry on the same path as HTTP
//! 429 rate limiting; any other status is terminal.

use std::time::Duration;

pub const MAX_ATTEMPTS: u32 = 5;
pub const STATUS_TOO_MANY_REQUESTS: u16 = 429;
/// Sentinel status for "no response at all" (DNS, connect, timeout, ...).
pub const STATUS_TRANSPORT_FAILURE: u16 = 0;

const INITIAL_DELAY: Duration = Duration::from_millis(100);
const MAX_DELAY: Duration = Duration::from_secs(10);

/// Per-request retry state: attempt counter plus the delay for the next
/// retry. Created at the start of a logical request and discarded with it;
/// never shared across requests or workers.
#[derive(Debug, Clone, Copy)]
pub struct Backoff {
    attempt: u32,
    delay: Duration,
}

impl Backoff {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attempt: 1,
            delay: INITIAL_DELAY,
        }
    }

    /// Attempt number of the most recently issued request, starting at 1.
    #[must_use]
    pub const fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Delay to sleep before the next attempt, or `None` once the attempt
    /// ceiling is reached. The delay doubles after every retried attempt;
    /// the cap applies before the value is handed out, so no caller ever
    /// sleeps longer than [`MAX_DELAY`].
    pub fn next_delay(&mut self) -> Option<Duration> {
        if self.attempt >= MAX_ATTEMPTS {
            return None;
        }
        self.attempt = self.attempt.saturating_add(1);
        let current = self.delay.min(MAX_DELAY);
        self.delay = self.delay.saturating_mul(2).min(MAX_DELAY);
        Some(current)
    }
}

impl Default for Backoff {
    fn default() -> Self {
        Self::new()
    }
}

#[must_use]
pub const fn is_retryable(status: u16) -> bool {
    status == STATUS_TOO_MANY_REQUESTS || status == STATUS_TRANSPORT_FAILURE
}
