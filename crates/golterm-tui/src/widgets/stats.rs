//! Stats row: generation, live cells, survival rate and auto-play speed

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Widget,
};

use golterm_core::{GameState, GRID_CELLS};

use crate::theme::styles;

pub struct StatsBar<'a> {
    game: Option<&'a GameState>,
    speed_ms: u64,
}

impl<'a> StatsBar<'a> {
    pub fn new(game: Option<&'a GameState>, speed_ms: u64) -> Self {
        Self { game, speed_ms }
    }

    fn items(&self) -> [(&'static str, String); 4] {
        let (generation, live, rate) = match self.game {
            Some(game) => (
                game.generation.to_string(),
                format!("{}/{}", game.live_cells, GRID_CELLS),
                format!("{}%", game.survival_rate()),
            ),
            None => ("-".to_string(), "-".to_string(), "-".to_string()),
        };

        [
            ("Generation", generation),
            ("Live cells", live),
            ("Survival", rate),
            ("Speed", format!("{}ms", self.speed_ms)),
        ]
    }
}

impl Widget for StatsBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let row = Rect::new(inner.x, inner.y, inner.width, 1);
        let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(row);

        for ((label, value), column) in self.items().into_iter().zip(columns.iter()) {
            Line::from(vec![
                Span::raw(" "),
                Span::styled(format!("{} ", label), styles::text_muted()),
                Span::styled(value, styles::text_bright_bold()),
            ])
            .render(*column, buf);
        }
    }
}
