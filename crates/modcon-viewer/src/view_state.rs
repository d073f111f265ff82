//! View state for the log list
//!
//! Ties the record store, the scroll position, and the viewport geometry
//! together and enforces the event-ordering invariant structurally: a filter
//! change resets the scroll offset *inside* `set_filter`, so a scroll event
//! processed afterwards can never act on a window computed against a stale
//! filtered length. Selecting a new source resets filter and scroll in the
//! same way.

use chrono::{DateTime, Local};
use modcon_log_parser::LevelFilter;

use crate::store::RecordStore;
use crate::window::{compute_range, ViewWindow};

/// Viewport geometry, in one shared unit (rows for the TUI).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub row_height: usize,
    pub viewport_height: usize,
    pub buffer_rows: usize,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            row_height: 1,
            viewport_height: 20,
            buffer_rows: 5,
        }
    }
}

/// Loading lifecycle of the selected source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// No source selected yet.
    #[default]
    Idle,
    Loading,
    Loaded,
    Error(String),
}

/// Which placeholder the renderer should show instead of the list.
///
/// `FetchFailed`, `Empty` and `NoMatch` are deliberately distinct states: an
/// operator must be able to tell a broken fetch from an empty log, and an
/// empty log from an active filter hiding everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    /// Nothing selected; prompt for a source.
    NoSource,
    Loading,
    FetchFailed(String),
    /// The source fetched fine but contains no records.
    Empty,
    /// Records exist but none match the active filter.
    NoMatch,
}

/// Scroll/filter/window state for the log list of the selected source.
#[derive(Debug, Clone, Default)]
pub struct LogViewState {
    store: RecordStore,
    geometry: Geometry,
    scroll_offset: usize,
    load: LoadState,
}

impl LogViewState {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            ..Self::default()
        }
    }

    /// Discard all state tied to the previous source. The filter returns to
    /// `All` and the scroll to the top; the load state becomes `Loading`.
    pub fn begin_source(&mut self) {
        self.store = RecordStore::new();
        self.store.set_filter(LevelFilter::All);
        self.scroll_offset = 0;
        self.load = LoadState::Loading;
    }

    /// Apply a fetched text blob, replacing the record sequence atomically,
    /// and jump to the newest lines.
    pub fn finish_load(&mut self, raw_text: &str, now: DateTime<Local>) {
        self.store.ingest(raw_text, now);
        self.load = LoadState::Loaded;
        self.scroll_to_bottom();
    }

    pub fn fail_load(&mut self, error: String) {
        self.load = LoadState::Error(error);
    }

    /// Change the level filter. Resets the scroll offset before returning,
    /// so any scroll event processed after this one sees the new window.
    pub fn set_filter(&mut self, filter: LevelFilter) {
        self.store.set_filter(filter);
        self.scroll_offset = 0;
    }

    pub fn scroll_to(&mut self, offset: usize) {
        self.scroll_offset = offset.min(self.max_scroll());
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let target = if delta < 0 {
            self.scroll_offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll_offset.saturating_add(delta as usize)
        };
        self.scroll_to(target);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.max_scroll();
    }

    /// Largest scroll offset that still shows a full viewport (0 when the
    /// content fits).
    pub fn max_scroll(&self) -> usize {
        self.content_height()
            .saturating_sub(self.geometry.viewport_height)
    }

    /// Total height of the filtered list in geometry units.
    pub fn content_height(&self) -> usize {
        self.store.filtered_len() * self.geometry.row_height
    }

    /// The record window for the current scroll position.
    pub fn window(&self) -> ViewWindow {
        compute_range(
            self.scroll_offset,
            self.geometry.viewport_height,
            self.geometry.row_height,
            self.geometry.buffer_rows,
            self.store.filtered_len(),
        )
    }

    /// Placeholder to render instead of the list, if any.
    pub fn placeholder(&self) -> Option<Placeholder> {
        match &self.load {
            LoadState::Idle => Some(Placeholder::NoSource),
            LoadState::Loading => Some(Placeholder::Loading),
            LoadState::Error(message) => Some(Placeholder::FetchFailed(message.clone())),
            LoadState::Loaded => {
                if self.store.is_empty() {
                    Some(Placeholder::Empty)
                } else if self.store.filtered_len() == 0 {
                    Some(Placeholder::NoMatch)
                } else {
                    None
                }
            }
        }
    }

    pub fn set_viewport_height(&mut self, viewport_height: usize) {
        self.geometry.viewport_height = viewport_height;
        // Keep the offset valid under the new geometry.
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }
}
