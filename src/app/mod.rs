//! Run-level reporting helpers shared by the bulk orchestrator and the CLI.

pub mod logging;
pub mod statistics;

pub use logging::log_progress;
pub use statistics::{print_bulk_summary, print_error_statistics};
