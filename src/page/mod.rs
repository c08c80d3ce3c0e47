//! Page state extraction.
//!
//! Narrow, typed view over a result-form response. Each function parses the
//! body it is given and returns owned data, so no parsed document is ever
//! held across an `.await`:
//! - hidden state tokens to echo on the next postback
//! - option lists of a cascading dropdown
//! - the terminal grade report, if one was rendered
//!
//! All parsing is done using CSS selectors via the `scraper` crate.

mod hidden;
mod options;
mod result;

// Re-export public API
pub use hidden::extract_hidden;
pub use options::extract_options;
pub use result::{extract_result, has_result_marker};
