use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::Theme;
use crate::view_models::LogsViewModel;

/// Render the windowed log list (or a placeholder) inside its panel
pub fn render(vm: &LogsViewModel, area: Rect, frame: &mut Frame) {
    let block = Block::default()
        .title(format!(" {} · filter: {} ", vm.source_label, vm.filter_label))
        .borders(Borders::ALL)
        .border_style(Theme::panel_border())
        .title_style(Theme::panel_title());

    if let Some(text) = &vm.placeholder {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            text.as_str(),
            Theme::placeholder(),
        )))
        .block(block)
        .centered();
        frame.render_widget(paragraph, area);
        return;
    }

    let lines: Vec<Line> = vm
        .rows
        .iter()
        .map(|row| {
            Line::from(vec![
                Span::styled(row.time_label.clone(), Theme::timestamp()),
                Span::raw(" "),
                Span::styled(format!("[{}]", row.badge), Theme::level_badge(row.level)),
                Span::raw(" "),
                Span::styled(row.message.clone(), Theme::text()),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
