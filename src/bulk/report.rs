//! Bulk run aggregation.

use std::time::Duration;

use crate::models::{ResultRecord, SummaryRow, TopRecord};

/// Outcome of a bulk run.
#[derive(Debug, Clone, Default)]
pub struct BulkReport {
    /// Found results, in the order they completed
    pub rows: Vec<SummaryRow>,
    /// Highest numeric score; on a tie the earlier arrival stays
    pub top: Option<TopRecord>,
    /// Lookups dispatched
    pub attempted: usize,
    /// Lookups that returned a result
    pub found: usize,
    /// Wall time of the whole run
    pub elapsed: Duration,
}

impl BulkReport {
    /// Adds a found result and updates the running maximum.
    ///
    /// Scores that do not parse as numbers are listed but never become the
    /// maximum.
    pub fn record(&mut self, record: &ResultRecord) {
        self.rows.push(record.summary_row());
        self.found += 1;

        let Some(score) = record.numeric_score() else {
            return;
        };
        let beats_top = self.top.as_ref().map_or(true, |top| score > top.score);
        if beats_top {
            self.top = Some(TopRecord {
                roll: record.roll.clone(),
                score,
            });
        }
    }

    /// Lookups that produced no result.
    pub fn not_found(&self) -> usize {
        self.attempted.saturating_sub(self.found)
    }
}
