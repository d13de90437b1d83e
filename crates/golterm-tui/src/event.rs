//! Terminal event polling

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use golterm_app::message::Message;
use golterm_app::InputKey;
use golterm_core::prelude::*;

/// Poll timeout, also the Tick period (20 FPS)
const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Something the runner has to act on
#[derive(Debug, Clone)]
pub enum TerminalEvent {
    Message(Message),
    /// Left click at a terminal position; mapped to a cell by the runner
    Click { column: u16, row: u16 },
}

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        _ => None,
    }
}

/// Map a raw crossterm event; `None` for everything golterm ignores
pub fn convert_event(event: Event) -> Option<TerminalEvent> {
    match event {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            key_event_to_input(key).map(|input| TerminalEvent::Message(Message::Key(input)))
        }
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            Some(TerminalEvent::Click {
                column: mouse.column,
                row: mouse.row,
            })
        }
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<TerminalEvent>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(convert_event(event::read()?))
    } else {
        // Tick on timeout keeps toasts expiring while idle
        Ok(Some(TerminalEvent::Message(Message::Tick)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventKind, MouseEvent};

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_char_conversion() {
        let key = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char(' ')));
    }

    #[test]
    fn test_char_with_ctrl_conversion() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(key), Some(InputKey::CharCtrl('c')));
    }

    #[test]
    fn test_uppercase_letters() {
        let key = KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('R')));
    }

    #[test]
    fn test_navigation_and_action_keys() {
        let cases = [
            (KeyCode::Up, InputKey::Up),
            (KeyCode::Down, InputKey::Down),
            (KeyCode::Left, InputKey::Left),
            (KeyCode::Right, InputKey::Right),
            (KeyCode::Enter, InputKey::Enter),
            (KeyCode::Esc, InputKey::Esc),
            (KeyCode::Backspace, InputKey::Backspace),
        ];
        for (code, expected) in cases {
            let key = KeyEvent::new(code, KeyModifiers::NONE);
            assert_eq!(key_event_to_input(key), Some(expected), "{:?}", code);
        }
    }

    #[test]
    fn test_unsupported_key_returns_none() {
        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), None);
        let key = KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert!(matches!(
            convert_event(Event::Key(key)),
            Some(TerminalEvent::Message(Message::Key(InputKey::Char(' '))))
        ));

        key.kind = KeyEventKind::Release;
        assert!(convert_event(Event::Key(key)).is_none());
    }

    #[test]
    fn test_left_click_becomes_click() {
        assert!(matches!(
            convert_event(mouse(MouseEventKind::Down(MouseButton::Left))),
            Some(TerminalEvent::Click { column: 12, row: 7 })
        ));
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        assert!(convert_event(mouse(MouseEventKind::Down(MouseButton::Right))).is_none());
        assert!(convert_event(mouse(MouseEventKind::Up(MouseButton::Left))).is_none());
        assert!(convert_event(mouse(MouseEventKind::Moved)).is_none());
        assert!(convert_event(Event::Resize(80, 24)).is_none());
    }
}
