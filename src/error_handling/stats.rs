//! Fetch statistics tracking.
//!
//! Thread-safe counters for failure categories, incomplete result pages and
//! walk outcomes, shared by every fetch of a run.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::{ErrorType, InfoType, WarningType};

/// Thread-safe processing statistics tracker.
///
/// Every variant of each category is registered with a zero counter on
/// creation, so lookups never miss. Share it across tasks with `Arc`.
#[derive(Debug)]
pub struct ProcessingStats {
    errors: HashMap<ErrorType, AtomicUsize>,
    warnings: HashMap<WarningType, AtomicUsize>,
    info: HashMap<InfoType, AtomicUsize>,
}

fn zeroed<K: IntoEnumIterator + Eq + Hash>() -> HashMap<K, AtomicUsize> {
    K::iter().map(|k| (k, AtomicUsize::new(0))).collect()
}

fn bump<K: Eq + Hash + std::fmt::Debug>(map: &HashMap<K, AtomicUsize>, key: K) {
    match map.get(&key) {
        Some(counter) => {
            counter.fetch_add(1, Ordering::Relaxed);
        }
        None => log::error!("No counter registered for {:?}", key),
    }
}

fn read<K: Eq + Hash>(map: &HashMap<K, AtomicUsize>, key: K) -> usize {
    map.get(&key).map_or(0, |c| c.load(Ordering::SeqCst))
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStats {
    pub fn new() -> Self {
        ProcessingStats {
            errors: zeroed(),
            warnings: zeroed(),
            info: zeroed(),
        }
    }

    pub fn increment_error(&self, error: ErrorType) {
        bump(&self.errors, error);
    }

    pub fn increment_warning(&self, warning: WarningType) {
        bump(&self.warnings, warning);
    }

    pub fn increment_info(&self, info_type: InfoType) {
        bump(&self.info, info_type);
    }

    pub fn get_error_count(&self, error: ErrorType) -> usize {
        read(&self.errors, error)
    }

    pub fn get_warning_count(&self, warning: WarningType) -> usize {
        read(&self.warnings, warning)
    }

    pub fn get_info_count(&self, info_type: InfoType) -> usize {
        read(&self.info, info_type)
    }

    /// Total error count across all error types.
    pub fn total_errors(&self) -> usize {
        ErrorType::iter().map(|e| self.get_error_count(e)).sum()
    }

    /// Total warning count across all warning types.
    pub fn total_warnings(&self) -> usize {
        WarningType::iter().map(|w| self.get_warning_count(w)).sum()
    }

    /// Total info count across all info types.
    pub fn total_info(&self) -> usize {
        InfoType::iter().map(|i| self.get_info_count(i)).sum()
    }
}
