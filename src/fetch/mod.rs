//! Fetch unit: one isolated result lookup.
//!
//! Every call builds its own `FormSession` (own client, own cookie jar, own
//! hidden state), so concurrent fetches share nothing but the statistics
//! counters. Whatever goes wrong inside, including a panic, comes back as
//! `NotFound` with the elapsed time; the caller is never torn down.

mod context;

use std::panic::AssertUnwindSafe;
use std::time::Instant;

use futures::FutureExt;
use log::{debug, warn};

use crate::error_handling::{update_error_stats, ErrorType, FetchError, InfoType, WarningType};
use crate::models::{FetchAttempt, FetchOutcome, SelectionPath};
use crate::session::FormSession;

pub use context::FetchContext;

/// Fetches the result for one enrollment number.
///
/// Timing runs from session creation to outcome.
pub async fn fetch_one(ctx: &FetchContext, path: &SelectionPath, enrollment: &str) -> FetchAttempt {
    let start = Instant::now();

    let walk = async {
        let mut session = FormSession::new(&ctx.config)?;
        let outcome = session.try_walk(path, enrollment).await?;
        Ok::<FetchOutcome, FetchError>(outcome)
    };

    let outcome = match AssertUnwindSafe(walk).catch_unwind().await {
        Ok(Ok(outcome)) => {
            record_outcome(ctx, &outcome);
            outcome
        }
        Ok(Err(e)) => {
            let category = update_error_stats(&ctx.stats, &e);
            warn!("No result for {} ({}): {}", enrollment, category, e);
            FetchOutcome::NotFound
        }
        Err(_) => {
            ctx.stats.increment_error(ErrorType::FetchTaskPanicked);
            warn!("Fetch for {} panicked; treating as no result", enrollment);
            FetchOutcome::NotFound
        }
    };

    let elapsed = start.elapsed();
    debug!(
        "Fetched {} in {:.2}s (found: {})",
        enrollment,
        elapsed.as_secs_f64(),
        outcome.is_found()
    );

    FetchAttempt {
        roll: enrollment.to_string(),
        outcome,
        elapsed,
    }
}

fn record_outcome(ctx: &FetchContext, outcome: &FetchOutcome) {
    match outcome {
        FetchOutcome::Found(record) => {
            ctx.stats.increment_info(InfoType::ResultFound);
            if record.score.is_none() {
                ctx.stats.increment_warning(WarningType::MissingScore);
            } else if record.numeric_score().is_none() {
                ctx.stats.increment_warning(WarningType::UnparseableScore);
            }
            if record.credit_total.is_none() {
                ctx.stats.increment_warning(WarningType::MissingCreditTotal);
            }
        }
        FetchOutcome::NotFound => ctx.stats.increment_info(InfoType::NoResultMarker),
    }
}
