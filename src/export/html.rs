//! Raw result page archive.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::models::ResultRecord;
use crate::utils::sanitize_file_stem;

/// Saves the record's raw page as `<dir>/<roll>.html`, creating `dir` if needed.
///
/// The roll is sanitized before it becomes a file name. An existing file for
/// the same roll is overwritten.
pub async fn archive_page(dir: &Path, record: &ResultRecord) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    let path = dir.join(format!("{}.html", sanitize_file_stem(&record.roll)));
    tokio::fs::write(&path, &record.raw_page)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
