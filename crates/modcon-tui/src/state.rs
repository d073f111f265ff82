//! Application State
//!
//! One `AppState` for the whole console. The log list portion lives in
//! `modcon_viewer::LogViewState`, which owns the record store, the filter and
//! the scroll/window bookkeeping.

use modcon_log_parser::{LevelFilter, LogLevel};
use modcon_viewer::{Geometry, LogViewState};

/// Filter surface exposed in the UI.
///
/// Narrower than the parsed level set on purpose: trace/fatal records are
/// parsed and shown under `all`, but the cycle only offers the levels the
/// module's operators filter by day to day.
pub const FILTER_CYCLE: [LevelFilter; 5] = [
    LevelFilter::All,
    LevelFilter::Only(LogLevel::Debug),
    LevelFilter::Only(LogLevel::Info),
    LevelFilter::Only(LogLevel::Warn),
    LevelFilter::Only(LogLevel::Error),
];

#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,

    /// Discovered log file names
    pub sources: Vec<String>,
    /// Index into `sources`
    pub selected: Option<usize>,
    /// Source discovery failure, shown in the header
    pub source_list_error: Option<String>,

    /// Record store + filter + scroll/window state for the selected source
    pub logs: LogViewState,

    /// Position in `FILTER_CYCLE`
    pub filter_index: usize,

    /// Show absolute timestamps instead of relative labels
    pub show_absolute_time: bool,
}

impl AppState {
    pub fn new(buffer_rows: usize) -> Self {
        Self {
            running: true,
            sources: Vec::new(),
            selected: None,
            source_list_error: None,
            logs: LogViewState::new(Geometry {
                row_height: 1,
                viewport_height: 20,
                buffer_rows,
            }),
            filter_index: 0,
            show_absolute_time: false,
        }
    }

    /// Name of the selected source, if any
    pub fn selected_name(&self) -> Option<&str> {
        self.selected
            .and_then(|index| self.sources.get(index))
            .map(String::as_str)
    }

    pub fn filter(&self) -> LevelFilter {
        FILTER_CYCLE[self.filter_index]
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_cycle_surface() {
        // The UI surface is {all, debug, info, warn, error}; trace and fatal
        // stay parse-only.
        assert_eq!(FILTER_CYCLE.len(), 5);
        assert_eq!(FILTER_CYCLE[0], LevelFilter::All);
        assert!(!FILTER_CYCLE.contains(&LevelFilter::Only(LogLevel::Trace)));
        assert!(!FILTER_CYCLE.contains(&LevelFilter::Only(LogLevel::Fatal)));
    }

    #[test]
    fn test_selected_name() {
        let mut state = AppState::default();
        assert_eq!(state.selected_name(), None);

        state.sources = vec!["a.log".into(), "b.log".into()];
        state.selected = Some(1);
        assert_eq!(state.selected_name(), Some("b.log"));

        state.selected = Some(9);
        assert_eq!(state.selected_name(), None);
    }
}
