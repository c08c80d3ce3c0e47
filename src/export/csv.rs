//! CSV export of the bulk summary table.

use anyhow::{Context, Result};
use csv::Writer;
use std::path::Path;

use crate::models::SummaryRow;

/// Writes the summary rows to `path`, header `Roll No,SGPA,Credits`.
///
/// Missing fields are written as empty cells. Rows keep the order given,
/// which for a bulk run is completion order.
///
/// # Returns
///
/// The number of rows written.
pub fn write_summary_csv(path: &Path, rows: &[SummaryRow]) -> Result<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let mut writer = Writer::from_path(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    // serialize() only emits a header once it sees a row
    if rows.is_empty() {
        writer.write_record(["Roll No", "SGPA", "Credits"])?;
    }
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("Failed to write row for {}", row.roll))?;
    }
    writer.flush().context("Failed to flush CSV output")?;

    Ok(rows.len())
}
