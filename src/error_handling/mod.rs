//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions (`FetchError`, `ConfigError`, `InitializationError`)
//! - Failure categorization for end-of-run reporting
//! - Thread-safe processing statistics
//!
//! Counted categories:
//! - **Errors**: transport or page-structure failures that ended a walk early
//! - **Warnings**: result pages that were found but incomplete
//! - **Info**: walk outcomes (result found, no result)

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_fetch_error, categorize_reqwest_error, update_error_stats};
pub use stats::ProcessingStats;
pub use types::{ConfigError, ErrorType, FetchError, InfoType, InitializationError, WarningType};
