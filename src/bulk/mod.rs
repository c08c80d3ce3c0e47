//! Bulk orchestrator.
//!
//! Fans one fetch per generated enrollment number out over a bounded pool
//! of Tokio tasks and fans the outcomes back in, in completion order.
//!
//! ```text
//! dispatcher: acquire permit → spawn fetch ─┐
//!                                           ├─ mpsc ─→ collector → BulkReport
//! (at most `concurrency_limit` in flight) ──┘
//! ```
//!
//! The permit is taken *before* the task is spawned, so the number of
//! live form sessions never exceeds the cap however many rolls are queued.
//! The collector is the only writer of the report, so aggregation needs no
//! locks.

mod report;

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::{info, warn};
use tokio::sync::mpsc;

use crate::app::log_progress;
use crate::config::{PROGRESS_LOGGING_INTERVAL, ROLL_SUFFIX_WIDTH};
use crate::fetch::{fetch_one, FetchContext};
use crate::initialization::init_semaphore;
use crate::models::{FetchAttempt, FetchOutcome, ResultRecord, SelectionPath};

pub use report::BulkReport;

/// Called by the collector for every found result, as it arrives.
pub type FoundCallback = Arc<dyn Fn(&ResultRecord, Duration) + Send + Sync>;

/// Something that can look up one enrollment number.
///
/// `FormFetcher` is the real one; the seam exists so the orchestration can
/// be exercised without a server.
pub trait RollFetcher: Send + Sync + 'static {
    fn fetch(
        &self,
        path: &SelectionPath,
        roll: &str,
    ) -> impl Future<Output = FetchAttempt> + Send;
}

/// Fetches through the result form with `fetch_one`.
#[derive(Debug, Clone)]
pub struct FormFetcher {
    ctx: FetchContext,
}

impl FormFetcher {
    pub fn new(ctx: FetchContext) -> Self {
        Self { ctx }
    }
}

impl RollFetcher for FormFetcher {
    fn fetch(
        &self,
        path: &SelectionPath,
        roll: &str,
    ) -> impl Future<Output = FetchAttempt> + Send {
        fetch_one(&self.ctx, path, roll)
    }
}

/// Enrollment numbers `prefix001 ..= prefix{count}`, zero-padded to three digits.
pub fn generate_rolls(prefix: &str, count: usize) -> Vec<String> {
    (1..=count)
        .map(|i| format!("{}{:0width$}", prefix, i, width = ROLL_SUFFIX_WIDTH))
        .collect()
}

/// Fetches `count` generated enrollment numbers through the result form.
pub async fn run_bulk(
    ctx: &FetchContext,
    path: &SelectionPath,
    prefix: &str,
    count: usize,
    concurrency_limit: usize,
    on_found: Option<FoundCallback>,
) -> BulkReport {
    let fetcher = Arc::new(FormFetcher::new(ctx.clone()));
    run_bulk_with(fetcher, path, prefix, count, concurrency_limit, on_found).await
}

/// Fetches `count` generated enrollment numbers with any `RollFetcher`.
///
/// Always completes: failed lookups are already `NotFound` by the time they
/// arrive, and a task that panics is logged and left out of the rows while
/// still counting as attempted.
pub async fn run_bulk_with<F: RollFetcher>(
    fetcher: Arc<F>,
    path: &SelectionPath,
    prefix: &str,
    count: usize,
    concurrency_limit: usize,
    on_found: Option<FoundCallback>,
) -> BulkReport {
    let start = Instant::now();
    let rolls = generate_rolls(prefix, count);
    let total = rolls.len();
    let semaphore = init_semaphore(concurrency_limit);
    let path = Arc::new(path.clone());
    info!(
        "Running bulk over {} enrollment numbers with {} workers",
        total,
        semaphore.available_permits()
    );

    let (tx, mut rx) = mpsc::unbounded_channel::<FetchAttempt>();

    let dispatcher = tokio::spawn(async move {
        let mut tasks = FuturesUnordered::new();
        let mut dispatched = 0usize;

        for roll in rolls {
            let permit = match Arc::clone(&semaphore).acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => {
                    warn!("Worker pool closed, not dispatching {}", roll);
                    break;
                }
            };
            dispatched += 1;

            let tx = tx.clone();
            let fetcher = Arc::clone(&fetcher);
            let path = Arc::clone(&path);
            tasks.push(tokio::spawn(async move {
                let _permit = permit;
                let attempt = fetcher.fetch(&path, &roll).await;
                // The collector only goes away once every sender is dropped.
                let _ = tx.send(attempt);
            }));
        }
        drop(tx);

        let mut panicked = 0usize;
        while let Some(task_result) = tasks.next().await {
            if let Err(join_error) = task_result {
                panicked += 1;
                warn!("Fetch task failed: {:?}", join_error);
            }
        }
        (dispatched, panicked)
    });

    let mut report = BulkReport::default();
    let mut completed = 0usize;
    let mut ticker = tokio::time::interval(PROGRESS_LOGGING_INTERVAL);
    ticker.tick().await;

    loop {
        tokio::select! {
            received = rx.recv() => {
                let Some(attempt) = received else { break };
                completed += 1;
                if let FetchOutcome::Found(record) = &attempt.outcome {
                    report.record(record);
                    if let Some(callback) = &on_found {
                        callback(record, attempt.elapsed);
                    }
                }
            }
            _ = ticker.tick() => {
                log_progress(start, completed, report.found, total);
            }
        }
    }

    report.attempted = match dispatcher.await {
        Ok((dispatched, panicked)) => {
            if panicked > 0 {
                warn!("{} fetch task(s) ended without an outcome", panicked);
            }
            dispatched
        }
        Err(e) => {
            warn!("Dispatcher failed: {:?}", e);
            total
        }
    };
    report.elapsed = start.elapsed();
    log_progress(start, completed, report.found, total);
    report
}
