//! Level colors and shared styles

use modcon_log_parser::LogLevel;
use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub fn level_color(level: LogLevel) -> Color {
        match level {
            LogLevel::Trace => Color::DarkGray,
            LogLevel::Debug => Color::Cyan,
            LogLevel::Info => Color::Green,
            LogLevel::Warn => Color::Yellow,
            LogLevel::Error => Color::Red,
            LogLevel::Fatal => Color::Magenta,
        }
    }

    pub fn level_badge(level: LogLevel) -> Style {
        Style::default()
            .fg(Self::level_color(level))
            .add_modifier(Modifier::BOLD)
    }

    pub fn timestamp() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn panel_border() -> Style {
        Style::default().fg(Color::Blue)
    }

    pub fn panel_title() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::DarkGray)
    }
}
