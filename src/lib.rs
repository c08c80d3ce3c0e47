//! exam_results library: fetches exam results through a postback result form
//!
//! The result site is a WebForms page: institute, degree, semester and exam
//! dropdowns cascade through postbacks, each of which must echo the page's
//! hidden state and every selection made so far. This crate replays that
//! cascade for one enrollment number ([`fetch_one`]) or for a numbered batch
//! under a small concurrency cap ([`run_bulk`]).
//!
//! # Example
//!
//! ```no_run
//! use exam_results::{fetch_one, Config, FetchContext, SelectionPath};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let ctx = FetchContext::new(Config::default());
//! let path = SelectionPath::standard("1", "3", "2", "41");
//!
//! let attempt = fetch_one(&ctx, &path, "25CE099").await;
//! if let Some(record) = attempt.outcome.record() {
//!     println!("{}: SGPA {:?}", record.roll, record.score);
//! }
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod app;
pub mod bulk;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod fetch;
pub mod initialization;
pub mod models;
pub mod page;
mod run;
pub mod selection;
pub mod session;
mod utils;

// Re-export public API
pub use bulk::{generate_rolls, run_bulk, run_bulk_with, BulkReport, RollFetcher};
pub use config::{Config, LogFormat, LogLevel, Mode, Opt, SelectionArgs};
pub use error_handling::{FetchError, ProcessingStats};
pub use fetch::{fetch_one, FetchContext};
pub use models::{
    FetchAttempt, FetchOutcome, ResultRecord, SelectOption, SelectionPath, SelectionStep,
    SessionState, SummaryRow, TopRecord,
};
pub use run::{bulk_count, bulk_run, run_app, single_run};
pub use session::FormSession;
