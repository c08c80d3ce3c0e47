//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::bulk::BulkReport;
use crate::error_handling::{ErrorType, InfoType, ProcessingStats, WarningType};

/// Prints a one-line summary of a bulk run.
pub fn print_bulk_summary(report: &BulkReport) {
    info!(
        "✅ Checked {} enrollment number{} ({} found, {} without result) in {:.1}s",
        report.attempted,
        if report.attempted == 1 { "" } else { "s" },
        report.found,
        report.not_found(),
        report.elapsed.as_secs_f64()
    );
}

/// Prints error, warning, and info statistics to the log.
pub fn print_error_statistics(error_stats: &ProcessingStats) {
    let total_errors = error_stats.total_errors();
    let total_warnings = error_stats.total_warnings();
    let total_info = error_stats.total_info();

    if total_errors > 0 {
        info!("Error Counts ({} total):", total_errors);
        for error_type in ErrorType::iter() {
            let count = error_stats.get_error_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }

    if total_warnings > 0 {
        info!("Warning Counts ({} total):", total_warnings);
        for warning_type in WarningType::iter() {
            let count = error_stats.get_warning_count(warning_type);
            if count > 0 {
                info!("   {}: {}", warning_type.as_str(), count);
            }
        }
    }

    if total_info > 0 {
        info!("Info Counts ({} total):", total_info);
        for info_type in InfoType::iter() {
            let count = error_stats.get_info_count(info_type);
            if count > 0 {
                info!("   {}: {}", info_type.as_str(), count);
            }
        }
    }
}
