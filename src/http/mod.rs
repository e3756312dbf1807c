//! Request dispatch: client construction, the per-request retry engine, and
//! the fixed-size worker pool.
mod backoff;
mod executor;
mod pool;


use reqwest::Client;

use crate::config::RunConfig;
use crate::error::AppResult;

pub use pool::run_pool;

const DEFAULT_USER_AGENT: &str = concat!("rajada-loadtest/", env!("CARGO_PKG_VERSION"));

/// Builds the shared HTTP client. Clones of the client share one connection
/// pool, so every worker reuses the same transport.
///
/// # Errors
///
/// Returns an error when the underlying TLS backend cannot be initialized.
pub fn build_client(config: &RunConfig) -> AppResult<Client> {
    let client = Client::builder()
        .timeout(config.timeout)
        .user_agent(DEFAULT_USER_AGENT)
        .build()?;
    Ok(client)
}
