//! Persistence of fetched results.
//!
//! Raw result pages are archived one file per enrollment number and the bulk
//! summary is written as a CSV table:
//!
//! ```text
//! <output_dir>/
//! ├── html/<roll>.html
//! └── sgpa_summary.csv
//! ```

mod csv;
mod html;

use std::path::{Path, PathBuf};

use crate::config::{HTML_ARCHIVE_DIR, SUMMARY_CSV_FILE};

pub use self::csv::write_summary_csv;
pub use html::archive_page;

/// Locations inside an output directory.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn html_dir(&self) -> PathBuf {
        self.root.join(HTML_ARCHIVE_DIR)
    }

    pub fn summary_csv(&self) -> PathBuf {
        self.root.join(SUMMARY_CSV_FILE)
    }
}
