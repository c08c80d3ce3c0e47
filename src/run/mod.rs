//! End-to-end runs: resolve the selection once, then fetch one enrollment
//! number or a whole batch, print the outcome and persist it.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{info, warn};
use tokio::sync::mpsc;

use crate::app::{print_bulk_summary, print_error_statistics};
use crate::bulk::{run_bulk, BulkReport, FoundCallback};
use crate::config::{Config, Mode, Opt};
use crate::export::{archive_page, write_summary_csv, OutputLayout};
use crate::fetch::{fetch_one, FetchContext};
use crate::models::{FetchOutcome, ResultRecord, SelectionPath};
use crate::selection::{choose_mode, resolve_selection, Chooser, RunMode};
use crate::session::FormSession;

/// Runs the CLI flow for parsed options.
///
/// Selection values and the mode missing from `opt` are asked through
/// `chooser`.
pub async fn run_app(opt: Opt, chooser: &mut dyn Chooser) -> Result<()> {
    let config = opt.config();
    config.validate().context("Invalid configuration")?;

    let mut session = FormSession::new(&config).context("Failed to create HTTP client")?;
    let path = resolve_selection(&mut session, &opt.selection, chooser).await?;
    drop(session);

    let mode = match opt.mode {
        Some(mode) => mode,
        None => match choose_mode(chooser)? {
            RunMode::Single => Mode::Single {
                enrollment: chooser.prompt("Enter full enrollment number (e.g. 25CE099)")?,
            },
            RunMode::Bulk => Mode::Bulk {
                prefix: chooser.prompt("Enter roll prefix (e.g. 25CE)")?,
                count: None,
            },
        },
    };

    let ctx = FetchContext::new(config);
    match mode {
        Mode::Single { enrollment } => {
            single_run(&ctx, &path, &enrollment).await?;
        }
        Mode::Bulk { prefix, count } => {
            let count = bulk_count(&ctx.config, count);
            bulk_run(&ctx, &path, &prefix, count).await?;
        }
    }
    print_error_statistics(&ctx.stats);
    Ok(())
}

/// Requested bulk size, defaulting to and capped at the roll limit.
pub fn bulk_count(config: &Config, requested: Option<usize>) -> usize {
    requested
        .unwrap_or(config.roll_limit)
        .min(config.roll_limit)
}

/// Fetches one enrollment number, prints it and archives the page.
pub async fn single_run(
    ctx: &FetchContext,
    path: &SelectionPath,
    enrollment: &str,
) -> Result<Option<ResultRecord>> {
    println!("\nFetching result...");
    let attempt = fetch_one(ctx, path, enrollment).await;

    let FetchOutcome::Found(record) = attempt.outcome else {
        println!("No result found.");
        return Ok(None);
    };

    println!("\n[{:.2}s] {}", attempt.elapsed.as_secs_f64(), record.roll);
    println!("SGPA: {}", record.score.as_deref().unwrap_or("None"));
    println!("Credits: {}", record.credit_total.as_deref().unwrap_or("None"));

    let layout = OutputLayout::new(&ctx.config.output_dir);
    let saved = archive_page(&layout.html_dir(), &record).await?;
    println!("Saved HTML → {}", saved.display());

    Ok(Some(record))
}

/// Fetches `count` generated enrollment numbers and writes the summary.
///
/// Each result is printed as it arrives and handed to an archive task that
/// writes its page. The CSV is written once the run completes and every
/// page is on disk, even when nothing was found.
pub async fn bulk_run(
    ctx: &FetchContext,
    path: &SelectionPath,
    prefix: &str,
    count: usize,
) -> Result<BulkReport> {
    let layout = OutputLayout::new(&ctx.config.output_dir);
    let html_dir = layout.html_dir();
    tokio::fs::create_dir_all(&html_dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", html_dir.display()))?;

    println!("\nRunning bulk with {} workers...\n", ctx.config.max_workers);

    let (archive_tx, mut archive_rx) = mpsc::unbounded_channel::<ResultRecord>();
    let archiver = tokio::spawn(async move {
        let mut archived = 0usize;
        while let Some(record) = archive_rx.recv().await {
            match archive_page(&html_dir, &record).await {
                Ok(_) => archived += 1,
                Err(e) => warn!("Failed to archive page for {}: {:#}", record.roll, e),
            }
        }
        archived
    });

    let on_found: FoundCallback = Arc::new(move |record: &ResultRecord, elapsed: Duration| {
        println!(
            "[{:5.2}s] {}  SGPA={}",
            elapsed.as_secs_f64(),
            record.roll,
            record.score.as_deref().unwrap_or("None")
        );
        // The archiver only stops once the callback, and with it the sender, is gone.
        let _ = archive_tx.send(record.clone());
    });

    // run_bulk drops the callback when it returns, which closes the archive channel.
    let report = run_bulk(ctx, path, prefix, count, ctx.config.max_workers, Some(on_found)).await;
    match archiver.await {
        Ok(archived) => info!("Archived {} page(s) in {}", archived, layout.html_dir().display()),
        Err(e) => warn!("Archive task failed: {:?}", e),
    }

    let csv_path = layout.summary_csv();
    let written = write_summary_csv(&csv_path, &report.rows)?;
    info!("Wrote {} row(s) to {}", written, csv_path.display());

    println!("\nDone.");
    println!("Total results: {}", report.rows.len());
    if let Some(top) = &report.top {
        let shown = report
            .rows
            .iter()
            .find(|row| row.roll == top.roll)
            .and_then(|row| row.score.clone())
            .unwrap_or_else(|| top.score.to_string());
        println!("Highest SGPA: {} ({})", shown, top.roll);
    }
    print_bulk_summary(&report);
    println!("Results saved in {}", layout.root().display());

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulk_count_defaults_and_caps_at_roll_limit() {
        let config = Config {
            roll_limit: 120,
            ..Default::default()
        };
        assert_eq!(bulk_count(&config, None), 120);
        assert_eq!(bulk_count(&config, Some(10)), 10);
        assert_eq!(bulk_count(&config, Some(500)), 120);
    }
}
