//! Record store for the selected log source
//!
//! Owns both the full parsed sequence and the filtered view of it. Ingest
//! replaces the sequence wholesale (a renderer never observes a partially
//! updated list), and filtering always recomputes from the full sequence, so
//! re-applying a filter is idempotent.

use chrono::{DateTime, Local};
use modcon_log_parser::{parse_text_at, LevelFilter, LogRecord};

/// Ordered records for the currently selected source plus the active filter.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<LogRecord>,
    filtered: Vec<LogRecord>,
    filter: LevelFilter,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw text blob and replace the full record sequence.
    ///
    /// Record order matches input line order; blank lines produce nothing.
    /// The active filter is re-applied to the new sequence.
    pub fn ingest(&mut self, raw_text: &str, now: DateTime<Local>) {
        self.records = parse_text_at(raw_text, now);
        self.refilter();
        log::debug!(
            "ingested {} records ({} after filter)",
            self.records.len(),
            self.filtered.len()
        );
    }

    /// Set the active level filter and recompute the filtered sequence.
    pub fn set_filter(&mut self, filter: LevelFilter) {
        self.filter = filter;
        self.refilter();
        log::debug!(
            "filter {} leaves {} of {} records",
            filter,
            self.filtered.len(),
            self.records.len()
        );
    }

    /// Drop all records, e.g. after the source itself was cleared.
    pub fn clear(&mut self) {
        self.records.clear();
        self.filtered.clear();
    }

    fn refilter(&mut self) {
        self.filtered = match self.filter {
            LevelFilter::All => self.records.clone(),
            LevelFilter::Only(level) => self
                .records
                .iter()
                .filter(|record| record.level == level)
                .cloned()
                .collect(),
        };
    }

    pub fn filter(&self) -> LevelFilter {
        self.filter
    }

    /// The full, unfiltered sequence.
    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    /// The filtered sequence the renderer windows over.
    pub fn filtered(&self) -> &[LogRecord] {
        &self.filtered
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use modcon_log_parser::LogLevel;

    const RAW: &str = "2024-01-01 12:00:00 [ERROR] disk full\n\n[INFO] 2024-01-01 12:05:00 ok\n";

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 15, 12, 0, 0).unwrap()
    }

    fn loaded_store() -> RecordStore {
        let mut store = RecordStore::new();
        store.ingest(RAW, fixed_now());
        store
    }

    #[test]
    fn test_ingest_skips_blank_lines() {
        let store = loaded_store();
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].message, "disk full");
        assert_eq!(store.records()[1].message, "ok");
    }

    #[test]
    fn test_filter_narrows_and_all_restores() {
        let mut store = loaded_store();

        store.set_filter(LevelFilter::Only(LogLevel::Error));
        assert_eq!(store.filtered_len(), 1);
        assert_eq!(store.filtered()[0].message, "disk full");

        store.set_filter(LevelFilter::All);
        assert_eq!(store.filtered_len(), 2);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let mut store = loaded_store();
        store.set_filter(LevelFilter::Only(LogLevel::Info));
        let once = store.filtered().to_vec();
        store.set_filter(LevelFilter::Only(LogLevel::Info));
        assert_eq!(store.filtered(), once.as_slice());
    }

    #[test]
    fn test_filter_preserves_order() {
        let raw = "INFO 2024-01-01 10:00:00 a\nERROR 2024-01-01 10:01:00 b\nINFO 2024-01-01 10:02:00 c\n";
        let mut store = RecordStore::new();
        store.ingest(raw, fixed_now());
        store.set_filter(LevelFilter::Only(LogLevel::Info));

        let messages: Vec<&str> = store
            .filtered()
            .iter()
            .map(|r| r.message.as_str())
            .collect();
        assert_eq!(messages, ["a", "c"]);

        // The filtered sequence is a subsequence of the full one.
        let mut records = store.records().iter();
        for filtered in store.filtered() {
            assert!(records.any(|r| r == filtered));
        }
    }

    #[test]
    fn test_ingest_replaces_previous_sequence() {
        let mut store = loaded_store();
        store.set_filter(LevelFilter::Only(LogLevel::Error));

        store.ingest("[INFO] 2024-02-02 08:00:00 fresh\n", fixed_now());
        assert_eq!(store.len(), 1);
        // Filter survives the swap and applies to the new sequence.
        assert_eq!(store.filtered_len(), 0);
    }

    #[test]
    fn test_clear_empties_both_sequences() {
        let mut store = loaded_store();
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.filtered_len(), 0);
    }
}
