//! End-to-end runs of the CLI flow with options parsed from arguments.

mod helpers;

use clap::Parser;
use exam_results::selection::TerminalChooser;
use exam_results::{run_app, Mode, Opt};
use helpers::{form_url, mount_result_for, no_result_page, result_page, start_form_server};
use std::io::Cursor;
use tempfile::TempDir;

fn parse(server_url: &str, out: &TempDir, tail: &[&str]) -> Opt {
    let out_dir = out.path().to_string_lossy().to_string();
    let mut args = vec![
        "exam_results",
        "--base-url",
        server_url,
        "--output-dir",
        out_dir.as_str(),
        "--max-workers",
        "2",
        "--roll-limit",
        "5",
        "--institute",
        "1",
        "--degree",
        "3",
        "--semester",
        "2",
        "--exam",
        "41",
    ];
    args.extend_from_slice(tail);
    Opt::try_parse_from(args).expect("arguments should parse")
}

#[test]
fn test_bulk_arguments_parse() {
    let out = TempDir::new().expect("Failed to create temp directory");
    let opt = parse("http://localhost/", &out, &["bulk", "25CE", "--count", "3"]);

    assert_eq!(opt.selection.institute.as_deref(), Some("1"));
    match opt.mode {
        Some(Mode::Bulk { prefix, count }) => {
            assert_eq!(prefix, "25CE");
            assert_eq!(count, Some(3));
        }
        other => panic!("unexpected mode: {:?}", other),
    }
}

#[tokio::test]
async fn test_run_app_single_archives_page() {
    let server = start_form_server(result_page("8.75", "22")).await;
    let out = TempDir::new().expect("Failed to create temp directory");
    let opt = parse(&form_url(&server), &out, &["single", "25CE099"]);
    let mut chooser = TerminalChooser::new(Cursor::new(Vec::new()), Vec::new());

    run_app(opt, &mut chooser).await.expect("run should succeed");

    assert!(out.path().join("html").join("25CE099.html").exists());
}

#[tokio::test]
async fn test_run_app_bulk_count_is_capped_by_roll_limit() {
    let server = start_form_server(no_result_page()).await;
    mount_result_for(&server, "25CE005", result_page("9.00", "20")).await;
    let out = TempDir::new().expect("Failed to create temp directory");
    let opt = parse(&form_url(&server), &out, &["bulk", "25CE", "--count", "50"]);
    let mut chooser = TerminalChooser::new(Cursor::new(Vec::new()), Vec::new());

    run_app(opt, &mut chooser).await.expect("run should succeed");

    let csv = std::fs::read_to_string(out.path().join("sgpa_summary.csv")).expect("summary");
    assert_eq!(csv, "Roll No,SGPA,Credits\n25CE005,9.00,20\n");
}

#[tokio::test]
async fn test_run_app_asks_for_mode_and_enrollment() {
    let server = start_form_server(no_result_page()).await;
    let out = TempDir::new().expect("Failed to create temp directory");
    let opt = parse(&form_url(&server), &out, &[]);
    // mode menu: "1" = single, then the enrollment number
    let mut chooser = TerminalChooser::new(Cursor::new(b"1\n25CE404\n".to_vec()), Vec::new());

    run_app(opt, &mut chooser).await.expect("no result is not an error");

    assert!(!out.path().join("html").join("25CE404.html").exists());
}

#[tokio::test]
async fn test_run_app_rejects_invalid_worker_count() {
    let out = TempDir::new().expect("Failed to create temp directory");
    let mut opt = parse("http://localhost/", &out, &["single", "25CE001"]);
    opt.max_workers = 9;
    let mut chooser = TerminalChooser::new(Cursor::new(Vec::new()), Vec::new());

    assert!(run_app(opt, &mut chooser).await.is_err());
}
