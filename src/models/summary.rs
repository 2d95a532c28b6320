use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

/// Counters accumulated over one split run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SplitSummary {
    /// Entries that ended up on disk: created plus skipped
    pub total: usize,
    pub created: usize,
    pub skipped: usize,
    pub failed: usize,
    /// Entries per category, including failed ones
    pub by_category: BTreeMap<String, usize>,
    pub output_dir: PathBuf,
}

impl SplitSummary {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir, ..Self::default() }
    }

    pub fn record_category(&mut self, category: &str) {
        *self.by_category.entry(category.to_string()).or_insert(0) += 1;
    }

    pub fn record_created(&mut self) {
        self.created += 1;
        self.total += 1;
    }

    pub fn record_skipped(&mut self) {
        self.skipped += 1;
        self.total += 1;
    }

    pub fn record_failed(&mut self) {
        self.failed += 1;
    }

    /// Number of entries seen for a category (0 when absent)
    pub fn category_count(&self, category: &str) -> usize {
        self.by_category.get(category).copied().unwrap_or(0)
    }
}
