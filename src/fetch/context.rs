//! Shared, read-only inputs of every fetch in a run.

use std::sync::Arc;

use crate::config::Config;
use crate::error_handling::ProcessingStats;

/// What a fetch needs besides its selection path and enrollment number.
///
/// Cloning is cheap; clones share the same statistics. Deliberately holds
/// no HTTP client: each fetch builds its own.
#[derive(Debug, Clone)]
pub struct FetchContext {
    pub config: Arc<Config>,
    pub stats: Arc<ProcessingStats>,
}

impl FetchContext {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            stats: Arc::new(ProcessingStats::new()),
        }
    }
}
