//! Utility functions.
//!
//! This module provides:
//! - CSS selector parsing utilities
//! - String sanitization for file names

pub mod sanitize;
mod selector;

pub use sanitize::sanitize_file_stem;
pub use selector::{parse_selector_unsafe, parse_selector_with_fallback};
