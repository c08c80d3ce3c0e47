//! Application configuration and constants.
//!
//! This module provides:
//! - Protocol constants (form field names, result marker, element ids)
//! - Operational defaults (workers, roll limit, timeouts)
//! - Library configuration and CLI option types

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, Mode, Opt, SelectionArgs};
