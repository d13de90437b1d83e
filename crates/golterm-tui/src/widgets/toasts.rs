//! Toast stack, drawn over the top-right corner of the screen

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Widget},
};

use golterm_app::Toasts;

use crate::theme::styles;

/// Toasts shown at once; older ones stay queued until they expire
pub const MAX_VISIBLE_TOASTS: usize = 4;

const MAX_TOAST_WIDTH: u16 = 48;

pub struct ToastStack<'a> {
    toasts: &'a Toasts,
}

impl<'a> ToastStack<'a> {
    pub fn new(toasts: &'a Toasts) -> Self {
        Self { toasts }
    }
}

impl Widget for ToastStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height == 0 {
            return;
        }

        // Newest last, like the order they were raised in
        let skip = self.toasts.len().saturating_sub(MAX_VISIBLE_TOASTS);
        let max_width = area.width.min(MAX_TOAST_WIDTH);

        for (i, toast) in self.toasts.iter().skip(skip).enumerate() {
            let y = area.y + 1 + i as u16;
            if y >= area.y + area.height {
                break;
            }

            let style = styles::toast(toast.severity);
            let line = Line::from(vec![
                Span::styled(format!(" {} ", styles::severity_icon(toast.severity)), style),
                Span::styled(format!("{} ", toast.message), style),
            ]);
            let width = (line.width() as u16).min(max_width);
            let margin = (area.width - width).min(1);
            let x = area.x + area.width - width - margin;
            let toast_area = Rect::new(x, y, width, 1);

            Clear.render(toast_area, buf);
            buf.set_style(toast_area, style);
            line.render(toast_area, buf);
        }
    }
}
