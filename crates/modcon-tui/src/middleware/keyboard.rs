//! KeyboardMiddleware - translates key events into domain actions
//!
//! Raw `KeyPressed` actions are always consumed here; everything downstream
//! of this middleware only ever sees domain actions.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn translate(key: &KeyEvent) -> Option<Action> {
        // Ctrl+C always quits, regardless of what 'c' means otherwise.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

            KeyCode::Tab => Some(Action::NextSource),
            KeyCode::BackTab => Some(Action::PrevSource),

            KeyCode::Char('r') => Some(Action::Refresh),
            KeyCode::Char('c') => Some(Action::ClearRequested),
            KeyCode::Char('f') => Some(Action::CycleFilter),
            KeyCode::Char('t') => Some(Action::ToggleTimestamps),

            KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollUp(1)),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollDown(1)),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::Home | KeyCode::Char('g') => Some(Action::ScrollToTop),
            KeyCode::End | KeyCode::Char('G') => Some(Action::ScrollToBottom),

            _ => None,
        }
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::KeyPressed(key) = action else {
            return true;
        };

        if let Some(mapped) = Self::translate(key) {
            dispatcher.dispatch(mapped);
        }

        false // raw key events never reach the reducer
    }
}
