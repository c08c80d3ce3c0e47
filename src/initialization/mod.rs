//! Application initialization and resource setup.
//!
//! This module provides functions to initialize:
//! - per-session HTTP clients (cookie store, timeouts, User-Agent)
//! - the logger
//! - the bulk worker semaphore

mod client;
mod logger;

use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::config::MAX_WORKERS_HARD_CAP;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Initializes the semaphore bounding concurrent form sessions.
///
/// The permit count is clamped to `1..=MAX_WORKERS_HARD_CAP`, so callers
/// can never ask the remote server for more parallel sessions than the cap.
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    let permits = count.clamp(1, MAX_WORKERS_HARD_CAP);
    if permits != count {
        log::warn!(
            "Requested {} workers, using {} (allowed range 1..={})",
            count,
            permits,
            MAX_WORKERS_HARD_CAP
        );
    }
    Arc::new(Semaphore::new(permits))
}
