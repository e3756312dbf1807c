//! Immutable run configuration, built once at startup and shared by every
//! worker. Replaces any notion of process-wide mutable settings.

use std::time::Duration;

use url::Url;

use crate::args::RunArgs;
use crate::error::{AppError, ValidationError};

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub target_url: Url,
    pub total_requests: u64,
    pub concurrency: usize,
    pub timeout: Duration,
}

impl RunConfig {
    /// Logical requests assigned to each worker. Integer division: when the
    /// budget does not divide evenly, the remainder is dropped.
    #[must_use]
    pub fn requests_per_worker(&self) -> u64 {
        let workers = u64::try_from(self.concurrency).unwrap_or(u64::MAX);
        self.total_requests.checked_div(workers).unwrap_or(0)
    }

    /// Requests the pool will actually issue:
    /// `concurrency * (total_requests / concurrency)`.
    #[must_use]
    pub fn planned_requests(&self) -> u64 {
        let workers = u64::try_from(self.concurrency).unwrap_or(u64::MAX);
        self.requests_per_worker().saturating_mul(workers)
    }
}

impl TryFrom<RunArgs> for RunConfig {
    type Error = AppError;

    fn try_from(args: RunArgs) -> Result<Self, Self::Error> {
        let target_url =
            Url::parse(&args.url).map_err(|err| ValidationError::InvalidUrl {
                value: args.url.clone(),
                source: err,
            })?;
        let scheme = target_url.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(AppError::validation(ValidationError::UnsupportedScheme {
                scheme: scheme.to_owned(),
            }));
        }

        Ok(Self {
            target_url,
            total_requests: args.requests.get(),
            concurrency: args.concurrency.get(),
            timeout: args.timeout,
        })
    }
}
