//! Footer with the shortcuts of the current mode

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use golterm_app::UiMode;

use crate::theme::styles;

const NORMAL_HINTS: &[(&str, &str)] = &[
    ("Space", "next"),
    ("Enter", "auto"),
    ("R", "reset"),
    ("A", "random"),
    ("P", "pattern"),
    ("←↑↓→", "move"),
    ("T", "toggle"),
    ("+/-", "speed"),
    ("S", "set speed"),
    ("Q", "quit"),
];

const SPEED_INPUT_HINTS: &[(&str, &str)] = &[
    ("0-9", "type"),
    ("Enter", "apply"),
    ("Esc", "cancel"),
];

pub struct KeyHints {
    mode: UiMode,
}

impl KeyHints {
    pub fn new(mode: UiMode) -> Self {
        Self { mode }
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hints = match self.mode {
            UiMode::Normal => NORMAL_HINTS,
            UiMode::SpeedInput => SPEED_INPUT_HINTS,
        };

        let mut spans = vec![Span::raw(" ")];
        for (key, action) in hints {
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", action), styles::text_muted()));
        }
        Line::from(spans).render(area, buf);
    }
}
