//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::{CursorMove, Message};
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(key),
        UiMode::SpeedInput => handle_key_speed_input(state, key),
    }
}

/// Handle key events in normal mode
fn handle_key_normal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // ─────────────────────────────────────────────────────────
        // Game Controls
        // ─────────────────────────────────────────────────────────
        InputKey::Char(' ') => Some(Message::AdvanceGeneration),
        InputKey::Enter => Some(Message::ToggleAutoPlay),
        InputKey::Char('r' | 'R') => Some(Message::ResetBoard),
        InputKey::Char('a' | 'A') => Some(Message::RandomizeBoard),
        InputKey::Char('p' | 'P') => Some(Message::ApplyPattern),
        InputKey::Char('f') => Some(Message::RefreshView),

        // ─────────────────────────────────────────────────────────
        // Cell Cursor
        // ─────────────────────────────────────────────────────────
        InputKey::Up | InputKey::Char('k') => Some(Message::MoveCursor(CursorMove::Up)),
        InputKey::Down | InputKey::Char('j') => Some(Message::MoveCursor(CursorMove::Down)),
        InputKey::Left | InputKey::Char('h') => Some(Message::MoveCursor(CursorMove::Left)),
        InputKey::Right | InputKey::Char('l') => Some(Message::MoveCursor(CursorMove::Right)),
        InputKey::Char('t' | 'x') => Some(Message::ToggleCellAtCursor),

        // ─────────────────────────────────────────────────────────
        // Speed
        // ─────────────────────────────────────────────────────────
        InputKey::Char('+' | '=') => Some(Message::SpeedUp),
        InputKey::Char('-' | '_') => Some(Message::SpeedDown),
        InputKey::Char('s') => Some(Message::OpenSpeedInput),

        _ => None,
    }
}

/// Handle key events while the speed prompt is open
///
/// Shortcuts are suspended: only digits edit the buffer.
fn handle_key_speed_input(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CancelSpeedInput),
        InputKey::Enter => Some(Message::SubmitSpeedInput),

        InputKey::Backspace => {
            let mut text = state.speed_input.clone();
            text.pop();
            Some(Message::SpeedInput { text })
        }

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::SpeedInput {
            text: String::new(),
        }),

        InputKey::Char(c) if c.is_ascii_digit() => {
            let mut text = state.speed_input.clone();
            text.push(c);
            Some(Message::SpeedInput { text })
        }

        // Force quit even in the prompt
        InputKey::CharCtrl('c') => Some(Message::Quit),

        _ => None,
    }
}
