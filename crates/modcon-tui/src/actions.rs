//! Actions
//!
//! Tagged actions for the console. Everything that changes state flows
//! through here, in dispatch order — that ordering is what guarantees a
//! scroll event arriving after a filter change sees the already-reset
//! window.

use modcon_log_parser::LevelFilter;
use ratatui::crossterm::event::KeyEvent;

#[derive(Debug, Clone)]
pub enum Action {
    // === Input ===
    /// Raw key event; translated by the keyboard middleware
    KeyPressed(KeyEvent),

    // === Source discovery ===
    /// Kick off source discovery at startup
    Bootstrap,
    /// Source list arrived
    SourcesLoaded(Vec<String>),
    /// Source discovery failed
    SourceListFailed(String),

    // === Source selection & loading ===
    /// Select a source by index into the discovered list
    SelectSource(usize),
    /// Cycle to the next/previous source
    NextSource,
    PrevSource,
    /// Re-fetch the selected source
    Refresh,
    /// Fetch finished; `source` guards against stale results
    LogLoaded { source: String, text: String },
    /// Fetch failed
    LoadFailed(String),

    // === Clearing ===
    /// Truncate the selected log file
    ClearRequested,
    /// Truncation done (middleware re-fetches afterwards)
    SourceCleared(String),
    ClearFailed(String),

    // === Filtering ===
    /// Advance through the filter cycle (all → debug → … → error)
    CycleFilter,
    SetFilter(LevelFilter),

    // === Scrolling ===
    ScrollUp(usize),
    ScrollDown(usize),
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,

    // === Viewport ===
    /// List viewport height in rows (dispatched when the layout changes)
    ViewportResized(usize),

    // === View options ===
    /// Show absolute timestamps instead of relative labels
    ToggleTimestamps,

    // === Lifecycle ===
    Quit,
}
