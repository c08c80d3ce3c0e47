//! Error categorization.
//!
//! Maps fetch failures onto the `ErrorType` buckets reported at the end of a run.

use super::stats::ProcessingStats;
use super::types::{ErrorType, FetchError};

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// Status codes are checked first because a non-success status surfaces as
/// a status error regardless of the transport that carried it.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if let Some(status) = error.status() {
        match status.as_u16() {
            429 => return ErrorType::HttpRequestTooManyRequests,
            503 => return ErrorType::HttpRequestServiceUnavailable,
            _ => return ErrorType::HttpRequestStatusError,
        }
    }

    if error.is_builder() {
        ErrorType::HttpClientBuildError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

/// Categorizes any fetch failure.
pub fn categorize_fetch_error(error: &FetchError) -> ErrorType {
    match error {
        FetchError::Transport(e) => categorize_reqwest_error(e),
        FetchError::Protocol(_) => ErrorType::FormStructureError,
    }
}

/// Records a fetch failure in the statistics and returns its category.
pub fn update_error_stats(stats: &ProcessingStats, error: &FetchError) -> ErrorType {
    let error_type = categorize_fetch_error(error);
    stats.increment_error(error_type);
    error_type
}
