//! Header bar: title, server address, connection dot and auto-play indicator

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use golterm_app::{AppPhase, AutoPlay};

use crate::theme::{palette, styles};

pub struct MainHeader<'a> {
    server_url: &'a str,
    phase: AppPhase,
    reachable: bool,
    auto_play: AutoPlay,
}

impl<'a> MainHeader<'a> {
    pub fn new(server_url: &'a str) -> Self {
        Self {
            server_url,
            phase: AppPhase::Initializing,
            reachable: false,
            auto_play: AutoPlay::Stopped,
        }
    }

    pub fn connection(mut self, phase: AppPhase, reachable: bool) -> Self {
        self.phase = phase;
        self.reachable = reachable;
        self
    }

    pub fn auto_play(mut self, auto_play: AutoPlay) -> Self {
        self.auto_play = auto_play;
        self
    }

    fn status_dot(&self) -> Span<'static> {
        match (self.phase, self.reachable) {
            (AppPhase::Initializing, false) => Span::styled("○", styles::text_muted()),
            (_, true) => Span::styled(
                "●",
                Style::default()
                    .fg(palette::STATUS_GREEN)
                    .add_modifier(Modifier::BOLD),
            ),
            (_, false) => Span::styled(
                "●",
                Style::default()
                    .fg(palette::STATUS_RED)
                    .add_modifier(Modifier::BOLD),
            ),
        }
    }

    fn auto_play_indicator(&self) -> Line<'static> {
        match self.auto_play {
            AutoPlay::Running { period_ms } => Line::from(vec![
                Span::styled(
                    "▶ AUTO",
                    Style::default()
                        .fg(palette::STATUS_GREEN)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" {}ms ", period_ms), styles::text_secondary()),
            ]),
            AutoPlay::Stopped => Line::from(Span::styled("⏸ PAUSED ", styles::text_muted())),
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = vec![
            Span::raw(" "),
            self.status_dot(),
            Span::raw(" "),
            Span::styled("golterm", styles::accent_bold()),
        ];
        let title_width = Line::from(title.clone()).width() as u16;

        let mut left = title;
        left.extend([
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.server_url, styles::text_secondary()),
        ]);
        let right = self.auto_play_indicator();

        let right_width = right.width() as u16;
        let row = Rect::new(inner.x, inner.y, inner.width, 1);
        Line::from(left).render(row, buf);

        // Indicator wins over a long URL, never over the title
        if title_width + 1 + right_width <= inner.width {
            let x = inner.x + inner.width - right_width;
            let right_area = Rect::new(x, inner.y, right_width, 1);
            for col in right_area.x.saturating_sub(1)..right_area.x + right_area.width {
                if let Some(cell) = buf.cell_mut((col, inner.y)) {
                    cell.set_char(' ');
                }
            }
            right.render(right_area, buf);
        }
    }
}
