//! Actions that can be triggered by keys
//!
//! Each action is a single, atomic operation on the demo player.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Activate the scenario at this selector index (0-based)
    ActivateScenario(usize),
    TogglePause,
    Reset,

    // ========== Transcript Scrolling ==========
    ScrollUp(u16),
    ScrollDown(u16),
    ScrollPageUp,
    ScrollPageDown,
    ScrollToTop,
    ScrollToBottom,
}

/// Default key map
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10).map(|d| d as usize - 1)?;
            Some(Action::ActivateScenario(index))
        }
        KeyCode::Char(' ') | KeyCode::Char('p') => Some(Action::TogglePause),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollUp(1)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollDown(1)),
        KeyCode::PageUp => Some(Action::ScrollPageUp),
        KeyCode::PageDown => Some(Action::ScrollPageDown),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::ScrollToTop),
        KeyCode::End | KeyCode::Char('G') => Some(Action::ScrollToBottom),
        _ => None,
    }
}
