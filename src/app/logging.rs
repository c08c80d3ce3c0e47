//! Progress logging utilities.

use log::info;
use std::time::Instant;

/// Logs progress of a bulk run.
///
/// # Arguments
///
/// * `start_time` - When the run started
/// * `completed` - Lookups finished so far, found or not
/// * `found` - Lookups that returned a grade report
/// * `total` - Lookups the run will attempt
pub fn log_progress(start_time: Instant, completed: usize, found: usize, total: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Checked {}/{} enrollment numbers ({} found) in {:.2} seconds (~{:.2}/sec)",
        completed, total, found, elapsed_secs, rate
    );
}
