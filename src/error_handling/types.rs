//! Error type definitions.
//!
//! This module defines all error, warning, and info types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Invalid configuration values.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid result form URL '{0}': {1}")]
    InvalidBaseUrl(String, #[source] url::ParseError),

    #[error("Worker count {requested} is out of range (1..={max})")]
    WorkersOutOfRange { requested: usize, max: usize },

    #[error("Roll limit must be at least 1")]
    ZeroRollLimit,

    #[error("Request timeout must be at least 1 second")]
    ZeroTimeout,
}

/// Failures while walking the result form.
///
/// Neither variant escapes a fetch: both are downgraded to a not-found
/// outcome at the fetch boundary. A well-formed page without a result is
/// not an error at all.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection, timeout, non-success status or body read failure.
    #[error("Transport error: {0}")]
    Transport(#[from] ReqwestError),

    /// The page is missing structure the protocol relies on.
    #[error("Protocol error: {0}")]
    Protocol(String),
}

/// Types of errors that can occur while fetching a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // HTTP/Network errors
    HttpClientBuildError,
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestStatusError,
    HttpRequestTooManyRequests,
    HttpRequestServiceUnavailable,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    // Page structure
    FormStructureError,
    // Orchestration
    FetchTaskPanicked,
}

/// Types of warnings for result pages that were found but incomplete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)]
pub enum WarningType {
    MissingScore,
    MissingCreditTotal,
    UnparseableScore,
}

/// Informational metrics about completed walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    ResultFound,
    NoResultMarker,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpClientBuildError => "HTTP client build error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestStatusError => "HTTP request status error",
            ErrorType::HttpRequestTooManyRequests => "Too many requests (429)",
            ErrorType::HttpRequestServiceUnavailable => "Service Unavailable (503)",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::FormStructureError => "Unexpected form structure",
            ErrorType::FetchTaskPanicked => "Fetch task panicked",
        }
    }
}

impl WarningType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::MissingScore => "Result page without score",
            WarningType::MissingCreditTotal => "Result page without credit total",
            WarningType::UnparseableScore => "Score is not a number",
        }
    }
}

impl InfoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::ResultFound => "Result found",
            InfoType::NoResultMarker => "No result for enrollment",
        }
    }
}
