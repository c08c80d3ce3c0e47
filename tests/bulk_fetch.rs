//! Integration tests for the fetch unit and the bulk orchestrator.

mod helpers;

use std::time::Duration;

use exam_results::error_handling::{ErrorType, InfoType};
use exam_results::{bulk_run, fetch_one, run_bulk, Config, FetchContext, FetchOutcome, SelectionPath};
use helpers::{
    all_requests, mount_result_for, no_result_page, result_page, start_form_server,
    start_slow_form_server, test_config,
};
use tempfile::TempDir;

fn standard_path() -> SelectionPath {
    SelectionPath::standard("1", "3", "2", "41")
}

#[tokio::test]
async fn test_fetch_one_reads_score_and_credits() {
    let server = start_form_server(result_page("8.75", "22")).await;
    let ctx = FetchContext::new(test_config(&server));

    let attempt = fetch_one(&ctx, &standard_path(), "25CE099").await;

    assert_eq!(attempt.roll, "25CE099");
    let record = attempt.outcome.record().expect("result should be found");
    assert_eq!(record.roll, "25CE099");
    assert_eq!(record.score.as_deref(), Some("8.75"));
    assert_eq!(record.credit_total.as_deref(), Some("22"));
    assert!(attempt.elapsed > Duration::ZERO);
    assert_eq!(ctx.stats.total_errors(), 0);
}

#[tokio::test]
async fn test_fetch_one_without_marker_is_not_found() {
    let server = start_form_server(no_result_page()).await;
    let ctx = FetchContext::new(test_config(&server));

    let attempt = fetch_one(&ctx, &standard_path(), "25CE404").await;

    assert_eq!(attempt.outcome, FetchOutcome::NotFound);
    assert_eq!(ctx.stats.total_errors(), 0, "a missing result is not an error");
    assert_eq!(ctx.stats.get_info_count(InfoType::NoResultMarker), 1);
}

#[tokio::test]
async fn test_fetch_one_timeout_is_not_found() {
    let server = start_slow_form_server(Duration::from_secs(3)).await;
    let config = Config {
        request_timeout_secs: 1,
        ..test_config(&server)
    };
    let ctx = FetchContext::new(config);

    let attempt = fetch_one(&ctx, &standard_path(), "25CE099").await;

    assert_eq!(attempt.outcome, FetchOutcome::NotFound);
    assert!(attempt.elapsed >= Duration::from_secs(1));
    assert_eq!(ctx.stats.get_error_count(ErrorType::HttpRequestTimeoutError), 1);
    assert_eq!(ctx.stats.get_info_count(InfoType::NoResultMarker), 0);
}

#[tokio::test]
async fn test_fetch_one_unreachable_form_is_not_found() {
    let config = Config {
        base_url: "http://127.0.0.1:9/".to_string(),
        request_timeout_secs: 2,
        ..Default::default()
    };
    let ctx = FetchContext::new(config);

    let attempt = fetch_one(&ctx, &standard_path(), "25CE001").await;

    assert_eq!(attempt.outcome, FetchOutcome::NotFound);
    assert_eq!(ctx.stats.total_errors(), 1);
}

#[tokio::test]
async fn test_run_bulk_without_results() {
    let server = start_form_server(no_result_page()).await;
    let ctx = FetchContext::new(test_config(&server));
    let path = standard_path();

    let report = run_bulk(&ctx, &path, "25CE", 10, 3, None).await;

    assert!(report.rows.is_empty());
    assert_eq!(report.found, 0);
    assert_eq!(report.attempted, 10);
    assert!(report.top.is_none());
    // every enrollment number walks its own session
    assert_eq!(all_requests(&server).await.len(), 10 * (path.len() + 2));
}

#[tokio::test]
async fn test_run_bulk_collects_found_rows_and_top() {
    let server = start_form_server(no_result_page()).await;
    mount_result_for(&server, "25CE002", result_page("7.50", "22")).await;
    mount_result_for(&server, "25CE004", result_page("9.10", "22")).await;
    mount_result_for(&server, "25CE005", result_page("AB", "0")).await;
    let ctx = FetchContext::new(test_config(&server));

    let report = run_bulk(&ctx, &standard_path(), "25CE", 6, 2, None).await;

    assert_eq!(report.attempted, 6);
    assert_eq!(report.found, 3);
    let mut rolls: Vec<&str> = report.rows.iter().map(|r| r.roll.as_str()).collect();
    rolls.sort_unstable();
    assert_eq!(rolls, ["25CE002", "25CE004", "25CE005"]);
    let top = report.top.expect("numeric scores were found");
    assert_eq!(top.roll, "25CE004");
    assert_eq!(top.score, 9.10);
}

#[tokio::test]
async fn test_bulk_run_writes_summary_and_archive() {
    let server = start_form_server(no_result_page()).await;
    mount_result_for(&server, "25CE003", result_page("8.75", "22")).await;
    let out = TempDir::new().expect("Failed to create temp directory");
    let config = Config {
        output_dir: out.path().to_path_buf(),
        ..test_config(&server)
    };
    let ctx = FetchContext::new(config);

    let report = bulk_run(&ctx, &standard_path(), "25CE", 4)
        .await
        .expect("bulk run should succeed");

    assert_eq!(report.found, 1);
    let csv = std::fs::read_to_string(out.path().join("sgpa_summary.csv")).expect("summary");
    assert_eq!(csv, "Roll No,SGPA,Credits\n25CE003,8.75,22\n");
    let archived =
        std::fs::read_to_string(out.path().join("html").join("25CE003.html")).expect("archive");
    assert!(archived.contains("SEMESTER  GRADE  REPORT"));
    assert!(!out.path().join("html").join("25CE001.html").exists());
}

#[tokio::test]
async fn test_bulk_run_with_nothing_found_still_writes_header() {
    let server = start_form_server(no_result_page()).await;
    let out = TempDir::new().expect("Failed to create temp directory");
    let config = Config {
        output_dir: out.path().to_path_buf(),
        ..test_config(&server)
    };
    let ctx = FetchContext::new(config);

    let report = bulk_run(&ctx, &standard_path(), "25CE", 3)
        .await
        .expect("bulk run should succeed");

    assert_eq!(report.attempted, 3);
    let csv = std::fs::read_to_string(out.path().join("sgpa_summary.csv")).expect("summary");
    assert_eq!(csv, "Roll No,SGPA,Credits\n");
}
