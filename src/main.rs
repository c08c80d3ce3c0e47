//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `exam_results` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::process;

use exam_results::initialization::init_logger_with;
use exam_results::selection::TerminalChooser;
use exam_results::{run_app, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // Try loading from current directory first, then from the executable's directory
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let stdin = io::stdin();
    let mut chooser = TerminalChooser::new(stdin.lock(), io::stdout());

    if let Err(e) = run_app(opt, &mut chooser).await {
        eprintln!("exam_results error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
