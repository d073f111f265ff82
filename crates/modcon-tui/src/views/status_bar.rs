use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::Theme;
use crate::view_models::LogsViewModel;

const KEY_HINTS: &str =
    "q quit · tab source · f filter · r refresh · c clear · t time · j/k scroll · g/G ends";

/// Render the one-line status bar: key hints left, scroll position right
pub fn render(vm: &LogsViewModel, area: Rect, frame: &mut Frame) {
    let hints_width = area.width.saturating_sub(vm.position_label.len() as u16 + 1);
    let line = Line::from(vec![
        Span::styled(format!("{KEY_HINTS:<hints$}", hints = hints_width as usize), Theme::status_bar()),
        Span::styled(vm.position_label.clone(), Theme::status_bar()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
