//! Speed prompt modal (`SpeedInput` mode)

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use golterm_app::SpeedControl;

use super::modal_overlay::{centered_rect, dim_background, render_shadow};
use crate::theme::styles;

const PROMPT_WIDTH: u16 = 40;
const PROMPT_HEIGHT: u16 = 5;

pub struct SpeedPrompt<'a> {
    input: &'a str,
    speed: &'a SpeedControl,
}

impl<'a> SpeedPrompt<'a> {
    pub fn new(input: &'a str, speed: &'a SpeedControl) -> Self {
        Self { input, speed }
    }
}

impl Widget for SpeedPrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let modal = centered_rect(PROMPT_WIDTH, PROMPT_HEIGHT, area);
        Clear.render(modal, buf);
        render_shadow(buf, modal);

        let block = styles::modal_block(" Auto-play speed ");
        let inner = block.inner(modal);
        block.render(modal, buf);

        let lines = vec![
            Line::from(vec![
                Span::styled(" Period (ms): ", styles::text_secondary()),
                Span::styled(self.input, styles::text_bright_bold()),
                Span::styled("▏", styles::accent_bold()),
            ]),
            Line::from(Span::styled(
                format!(" {}-{}ms, clamped", self.speed.min_ms, self.speed.max_ms),
                styles::text_muted(),
            )),
            Line::from(Span::styled(
                " Enter apply · Esc cancel",
                styles::text_primary(),
            )),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_prompt_shows_input_and_range() {
        let speed = SpeedControl::default();
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(SpeedPrompt::new("250", &speed), area);

        assert!(term.buffer_contains("Auto-play speed"));
        assert!(term.buffer_contains("Period (ms): 250"));
        assert!(term.buffer_contains("100-2000ms"));
    }
}
