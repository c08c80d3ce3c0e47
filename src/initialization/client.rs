//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, TCP_CONNECT_TIMEOUT_SECS};

/// Builds the HTTP client for one form session.
///
/// Each session gets its own client so that its cookie jar (the server's
/// session cookie) is never seen by another session. Configured with:
/// - an in-memory cookie store
/// - User-Agent from the configuration
/// - per-request timeout from the configuration
/// - TCP connect timeout capped at `TCP_CONNECT_TIMEOUT_SECS`
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    let request_timeout = config.request_timeout();
    let connect_timeout = request_timeout.min(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS));
    ClientBuilder::new()
        .cookie_store(true)
        .timeout(request_timeout)
        .connect_timeout(connect_timeout)
        .user_agent(config.user_agent.clone())
        .build()
}
