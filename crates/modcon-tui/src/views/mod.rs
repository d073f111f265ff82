//! Views
//!
//! ratatui rendering. Views consume view models only; all formatting happens
//! upstream.

mod logs_view;
mod status_bar;

use chrono::Local;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::state::AppState;
use crate::view_models::LogsViewModel;

/// Render the whole console
pub fn render(state: &AppState, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.area());

    let vm = LogsViewModel::from_state(state, Local::now());
    logs_view::render(&vm, chunks[0], frame);
    status_bar::render(&vm, chunks[1], frame);
}

/// Rows available to the log list for a terminal of this height: the status
/// bar line and the panel borders are not list rows.
pub fn list_viewport_height(terminal_height: u16) -> usize {
    terminal_height.saturating_sub(3) as usize
}
