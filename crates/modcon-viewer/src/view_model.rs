//! Render descriptors for the windowed log list
//!
//! Pre-computes everything a presentation layer needs per visible record, so
//! views stay free of formatting logic. Escaping policy: a markup-embedding
//! presentation (HTML) must escape the message before it reaches markup —
//! [`escape_html`] is provided for that; the terminal view renders text
//! verbatim and needs no escaping.

use chrono::{DateTime, Local};
use modcon_log_parser::{format_absolute, format_relative, LogLevel};
use serde::Serialize;

use crate::view_state::{LogViewState, Placeholder};
use crate::window::ViewWindow;

/// One display-ready row of the log list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderRow {
    /// Index into the filtered sequence.
    pub index: usize,
    /// Vertical position of the row, `index * row_height`, in geometry units.
    pub top_offset: usize,
    /// Short label like "3 minutes ago" or "yesterday 23:30".
    pub relative_time: String,
    /// Full timestamp for tooltips/detail panes.
    pub absolute_time: String,
    pub level: LogLevel,
    pub message: String,
}

impl RenderRow {
    /// The message with HTML metacharacters escaped, for markup presentations.
    pub fn escaped_message(&self) -> String {
        escape_html(&self.message)
    }
}

/// Display-ready model of the log list for the current event.
#[derive(Debug, Clone)]
pub struct LogListViewModel {
    /// The window the rows were materialized for.
    pub window: ViewWindow,
    /// Length of the filtered sequence.
    pub total: usize,
    /// Full height of the list in geometry units (for scrollbar sizing).
    pub content_height: usize,
    pub scroll_offset: usize,
    /// Rows for `window`, in sequence order.
    pub rows: Vec<RenderRow>,
    /// When set, render this instead of the list.
    pub placeholder: Option<Placeholder>,
}

impl LogListViewModel {
    /// Materialize the current window of `state` into display rows.
    pub fn from_state(state: &LogViewState, now: DateTime<Local>) -> Self {
        let window = state.window();
        let row_height = state.geometry().row_height;

        let rows = state.store().filtered()[window.start..window.end]
            .iter()
            .enumerate()
            .map(|(offset, record)| {
                let index = window.start + offset;
                RenderRow {
                    index,
                    top_offset: index * row_height,
                    relative_time: format_relative(record.timestamp, now),
                    absolute_time: format_absolute(record.timestamp),
                    level: record.level,
                    message: record.message.clone(),
                }
            })
            .collect();

        Self {
            window,
            total: state.store().filtered_len(),
            content_height: state.content_height(),
            scroll_offset: state.scroll_offset(),
            rows,
            placeholder: state.placeholder(),
        }
    }
}

/// Escape `&`, `<`, `>`, `"` and `'` for embedding in HTML markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_state::Geometry;
    use chrono::TimeZone;
    use modcon_log_parser::LevelFilter;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 15, 12, 0, 0).unwrap()
    }

    fn state_with(n: usize) -> LogViewState {
        let mut raw = String::new();
        for i in 0..n {
            raw.push_str(&format!("2024-05-15 11:0{}:00 [INFO] line {i}\n", i % 10));
        }
        let mut state = LogViewState::new(Geometry {
            row_height: 1,
            viewport_height: 5,
            buffer_rows: 1,
        });
        state.begin_source();
        state.finish_load(&raw, fixed_now());
        state
    }

    #[test]
    fn test_rows_cover_exactly_the_window() {
        let mut state = state_with(50);
        state.scroll_to(20);
        let vm = LogListViewModel::from_state(&state, fixed_now());

        assert_eq!(vm.window.start, 19);
        assert_eq!(vm.rows.len(), vm.window.len());
        assert_eq!(vm.rows.first().unwrap().index, vm.window.start);
        assert_eq!(vm.rows.last().unwrap().index, vm.window.end - 1);
    }

    #[test]
    fn test_top_offset_tracks_index() {
        let state = state_with(8);
        let vm = LogListViewModel::from_state(&state, fixed_now());
        for row in &vm.rows {
            assert_eq!(row.top_offset, row.index);
        }
    }

    #[test]
    fn test_rows_carry_time_labels() {
        let state = state_with(1);
        let vm = LogListViewModel::from_state(&state, fixed_now());
        let row = &vm.rows[0];
        assert_eq!(row.relative_time, "today 11:00");
        assert_eq!(row.absolute_time, "2024-05-15 11:00:00");
    }

    #[test]
    fn test_placeholder_replaces_rows() {
        let mut state = state_with(3);
        state.set_filter(LevelFilter::Only(modcon_log_parser::LogLevel::Fatal));
        let vm = LogListViewModel::from_state(&state, fixed_now());
        assert_eq!(vm.placeholder, Some(Placeholder::NoMatch));
        assert!(vm.rows.is_empty());
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b a="1">&'x'</b>"#),
            "&lt;b a=&quot;1&quot;&gt;&amp;&#39;x&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }
}
