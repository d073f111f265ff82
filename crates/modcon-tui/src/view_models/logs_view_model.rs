//! Logs View Model
//!
//! Transforms `AppState` into display-ready rows for the log panel. The
//! viewer's window includes buffer rows on both sides of the viewport; the
//! terminal has no scroll latency to hide, so only the rows actually inside
//! the viewport are emitted here.

use chrono::{DateTime, Local};
use modcon_log_parser::LogLevel;
use modcon_viewer::{LogListViewModel, Placeholder};

use crate::state::AppState;

/// One display-ready log row
#[derive(Debug, Clone)]
pub struct LogRowViewModel {
    /// Relative label, or the absolute timestamp when toggled
    pub time_label: String,
    pub level: LogLevel,
    /// Upper-cased level for the badge, e.g. "ERROR"
    pub badge: String,
    pub message: String,
}

/// View model for rendering the logs panel
#[derive(Debug, Clone)]
pub struct LogsViewModel {
    /// "module.log (1/4)", or a hint when nothing is discovered
    pub source_label: String,
    /// Active filter name for the title, e.g. "all"
    pub filter_label: String,
    /// When set, render this text instead of the rows
    pub placeholder: Option<String>,
    pub rows: Vec<LogRowViewModel>,
    /// "87-106/245" scroll position for the status bar
    pub position_label: String,
}

impl LogsViewModel {
    pub fn from_state(state: &AppState, now: DateTime<Local>) -> Self {
        let source_label = match state.selected_name() {
            Some(name) => format!(
                "{} ({}/{})",
                name,
                state.selected.map(|i| i + 1).unwrap_or(0),
                state.sources.len()
            ),
            None => match &state.source_list_error {
                Some(error) => format!("source discovery failed: {error}"),
                None if state.sources.is_empty() => "no log files found".to_string(),
                None => "no source selected".to_string(),
            },
        };

        let filter_label = state.logs.store().filter().to_string();

        let list = LogListViewModel::from_state(&state.logs, now);

        let placeholder = list.placeholder.as_ref().map(placeholder_text);

        // Trim the window's buffer margin down to the viewport itself.
        let viewport = state.logs.geometry().viewport_height;
        let skip = list.scroll_offset.saturating_sub(list.window.start);
        let rows: Vec<LogRowViewModel> = list
            .rows
            .iter()
            .skip(skip)
            .take(viewport)
            .map(|row| LogRowViewModel {
                time_label: if state.show_absolute_time {
                    row.absolute_time.clone()
                } else {
                    row.relative_time.clone()
                },
                level: row.level,
                badge: row.level.to_string().to_uppercase(),
                message: row.message.clone(),
            })
            .collect();

        let position_label = if list.total == 0 {
            "0/0".to_string()
        } else {
            let first = list.scroll_offset + 1;
            let last = (list.scroll_offset + rows.len()).min(list.total);
            format!("{first}-{last}/{}", list.total)
        };

        Self {
            source_label,
            filter_label,
            placeholder,
            rows,
            position_label,
        }
    }
}

fn placeholder_text(placeholder: &Placeholder) -> String {
    match placeholder {
        Placeholder::NoSource => "select a log file to view".to_string(),
        Placeholder::Loading => "loading...".to_string(),
        Placeholder::FetchFailed(error) => format!("failed to load log: {error}"),
        Placeholder::Empty => "no data".to_string(),
        Placeholder::NoMatch => "no data matching filter".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Action;
    use crate::reducer::reduce;
    use chrono::TimeZone;
    use modcon_log_parser::LevelFilter;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 15, 12, 0, 0).unwrap()
    }

    fn loaded_state(lines: usize) -> AppState {
        let mut state = AppState::default();
        state = reduce(state, &Action::SourcesLoaded(vec!["module.log".into()]));
        state = reduce(state, &Action::SelectSource(0));
        let mut text = String::new();
        for i in 0..lines {
            text.push_str(&format!("2024-05-15 11:00:00 [INFO] line {i}\n"));
        }
        reduce(
            state,
            &Action::LogLoaded {
                source: "module.log".into(),
                text,
            },
        )
    }

    #[test]
    fn test_rows_limited_to_viewport() {
        let vm = LogsViewModel::from_state(&loaded_state(100), fixed_now());
        assert_eq!(vm.rows.len(), 20);
        assert!(vm.placeholder.is_none());
        // Loaded at the bottom: the last row is the newest line.
        assert_eq!(vm.rows.last().unwrap().message, "line 99");
        assert_eq!(vm.position_label, "81-100/100");
    }

    #[test]
    fn test_badge_and_time_label() {
        let state = loaded_state(1);
        let vm = LogsViewModel::from_state(&state, fixed_now());
        assert_eq!(vm.rows[0].badge, "INFO");
        assert_eq!(vm.rows[0].time_label, "today 11:00");

        let state = reduce(state, &Action::ToggleTimestamps);
        let vm = LogsViewModel::from_state(&state, fixed_now());
        assert_eq!(vm.rows[0].time_label, "2024-05-15 11:00:00");
    }

    #[test]
    fn test_no_match_placeholder_text() {
        let mut state = loaded_state(3);
        state = reduce(
            state,
            &Action::SetFilter(LevelFilter::Only(modcon_log_parser::LogLevel::Error)),
        );
        let vm = LogsViewModel::from_state(&state, fixed_now());
        assert_eq!(vm.placeholder.as_deref(), Some("no data matching filter"));
        assert!(vm.rows.is_empty());
    }

    #[test]
    fn test_source_label_counts() {
        let vm = LogsViewModel::from_state(&loaded_state(1), fixed_now());
        assert_eq!(vm.source_label, "module.log (1/1)");
        assert_eq!(vm.filter_label, "all");
    }
}
