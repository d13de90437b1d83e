//! Board panel: the 5x5 grid with birth/death highlighting
//!
//! [`GridGeometry`] is shared by drawing and mouse hit-testing, so a click
//! always lands on the cell that was drawn under it.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use golterm_app::RenderedBoard;
use golterm_core::GRID_SIZE;

use crate::theme::{palette, styles};

/// Cell sizes tried from largest to smallest: (width, height, gap)
const CELL_PRESETS: [(u16, u16, u16); 3] = [(5, 2, 1), (3, 1, 1), (2, 1, 0)];

const GRID: u16 = GRID_SIZE as u16;

/// Where each cell of the grid sits on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub origin_x: u16,
    pub origin_y: u16,
    pub cell_width: u16,
    pub cell_height: u16,
    pub gap: u16,
}

impl GridGeometry {
    /// Largest cell size that fits `area`, centered in it
    pub fn fit(area: Rect) -> Option<Self> {
        CELL_PRESETS
            .iter()
            .find_map(|&(cell_width, cell_height, gap)| {
                let width = cell_width * GRID + gap * (GRID - 1);
                let height = cell_height * GRID + gap * (GRID - 1);
                (width <= area.width && height <= area.height).then(|| Self {
                    origin_x: area.x + (area.width - width) / 2,
                    origin_y: area.y + (area.height - height) / 2,
                    cell_width,
                    cell_height,
                    gap,
                })
            })
    }

    fn pitch_x(&self) -> u16 {
        self.cell_width + self.gap
    }

    fn pitch_y(&self) -> u16 {
        self.cell_height + self.gap
    }

    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        Rect::new(
            self.origin_x + col as u16 * self.pitch_x(),
            self.origin_y + row as u16 * self.pitch_y(),
            self.cell_width,
            self.cell_height,
        )
    }

    /// Cell under the terminal position `(x, y)`; gaps hit nothing
    pub fn cell_at(&self, x: u16, y: u16) -> Option<(usize, usize)> {
        let dx = x.checked_sub(self.origin_x)?;
        let dy = y.checked_sub(self.origin_y)?;

        let col = dx / self.pitch_x();
        let row = dy / self.pitch_y();
        if col >= GRID || row >= GRID {
            return None;
        }
        if dx % self.pitch_x() >= self.cell_width || dy % self.pitch_y() >= self.cell_height {
            return None;
        }
        Some((row as usize, col as usize))
    }
}

/// Grid panel widget
pub struct GridView<'a> {
    board: Option<&'a RenderedBoard>,
    cursor: Option<(usize, usize)>,
    highlight_changes: bool,
    busy_label: Option<&'a str>,
}

impl<'a> GridView<'a> {
    pub fn new(board: Option<&'a RenderedBoard>) -> Self {
        Self {
            board,
            cursor: None,
            highlight_changes: true,
            busy_label: None,
        }
    }

    pub fn cursor(mut self, cursor: Option<(usize, usize)>) -> Self {
        self.cursor = cursor;
        self
    }

    /// Whether births and deaths of the last render are still highlighted
    pub fn highlight_changes(mut self, highlight: bool) -> Self {
        self.highlight_changes = highlight;
        self
    }

    /// Show an in-flight request in the panel border
    pub fn busy(mut self, label: Option<&'a str>) -> Self {
        self.busy_label = label;
        self
    }

    fn render_cell(&self, board: &RenderedBoard, row: usize, col: usize, area: Rect, buf: &mut Buffer) {
        let alive = board.state.grid[row][col];
        let change = if self.highlight_changes {
            board.change_at(row, col)
        } else {
            None
        };
        let is_cursor = self.cursor == Some((row, col));

        let (fill, mut style) = if alive {
            let color = if change.is_some() {
                palette::CELL_BORN
            } else {
                palette::CELL_ALIVE
            };
            ('█', Style::default().fg(color).bg(palette::CARD_BG))
        } else {
            (' ', Style::default().bg(palette::CELL_DEAD))
        };
        if change.is_some() {
            style = style.add_modifier(Modifier::BOLD);
        }
        if is_cursor {
            style = if alive {
                style.fg(palette::CELL_CURSOR)
            } else {
                style.bg(palette::CELL_CURSOR)
            };
        }

        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(fill);
                    cell.set_style(style);
                }
            }
        }

        if !alive {
            let (marker, marker_style) = if change.is_some() {
                ('×', style.fg(palette::CELL_DIED))
            } else {
                ('·', style.fg(palette::TEXT_MUTED))
            };
            let center = (area.x + area.width / 2, area.y + area.height / 2);
            if let Some(cell) = buf.cell_mut(center) {
                cell.set_char(marker);
                cell.set_style(marker_style);
            }
        }
    }
}

impl Widget for GridView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match self.board {
            Some(board) if board.state.is_extinct() => Line::from(vec![
                Span::styled(" Board ", styles::accent_bold()),
                Span::styled("· extinct ", styles::text_muted()),
            ]),
            _ => Line::styled(" Board ", styles::accent_bold()),
        };
        let mut block = styles::glass_block(self.cursor.is_some()).title(title);
        if let Some(label) = self.busy_label {
            block = block.title_bottom(
                Line::styled(format!(" ⟳ {} ", label), styles::text_secondary())
                    .alignment(Alignment::Right),
            );
        }
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let Some(board) = self.board else {
            render_centered("Waiting for the game server…", inner, buf);
            return;
        };

        let Some(geometry) = GridGeometry::fit(inner) else {
            render_centered("Terminal too small", inner, buf);
            return;
        };

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                self.render_cell(board, row, col, geometry.cell_rect(row, col), buf);
            }
        }
    }
}

fn render_centered(text: &str, area: Rect, buf: &mut Buffer) {
    let y = area.y + area.height / 2;
    Paragraph::new(Line::styled(text, styles::text_muted()))
        .alignment(Alignment::Center)
        .render(Rect::new(area.x, y, area.width, 1), buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_board, TestTerminal};

    #[test]
    fn test_fit_picks_largest_cells() {
        let geometry = GridGeometry::fit(Rect::new(1, 1, 78, 15)).unwrap();
        assert_eq!((geometry.cell_width, geometry.cell_height), (5, 2));
        // 5 * 5 + 4 gaps = 29 wide, 5 * 2 + 4 = 14 high
        assert_eq!(geometry.origin_x, 1 + (78 - 29) / 2);
        assert_eq!(geometry.origin_y, 1);
    }

    #[test]
    fn test_fit_falls_back_to_compact_cells() {
        let geometry = GridGeometry::fit(Rect::new(0, 0, 20, 9)).unwrap();
        assert_eq!((geometry.cell_width, geometry.cell_height), (3, 1));

        let geometry = GridGeometry::fit(Rect::new(0, 0, 10, 5)).unwrap();
        assert_eq!((geometry.cell_width, geometry.gap), (2, 0));

        assert!(GridGeometry::fit(Rect::new(0, 0, 9, 5)).is_none());
    }

    #[test]
    fn test_cell_at_maps_every_cell_rect() {
        let geometry = GridGeometry::fit(Rect::new(0, 0, 40, 20)).unwrap();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let rect = geometry.cell_rect(row, col);
                assert_eq!(geometry.cell_at(rect.x, rect.y), Some((row, col)));
                assert_eq!(
                    geometry.cell_at(rect.x + rect.width - 1, rect.y + rect.height - 1),
                    Some((row, col))
                );
            }
        }
    }

    #[test]
    fn test_cell_at_misses_gaps_and_outside() {
        let geometry = GridGeometry::fit(Rect::new(0, 0, 40, 20)).unwrap();
        let first = geometry.cell_rect(0, 0);

        // Gap right of the first cell
        assert_eq!(geometry.cell_at(first.x + first.width, first.y), None);
        // Left of and above the grid
        assert_eq!(geometry.cell_at(first.x.saturating_sub(1), first.y), None);
        assert_eq!(geometry.cell_at(first.x, first.y.saturating_sub(1)), None);
        // Past the last column
        let last = geometry.cell_rect(4, 4);
        assert_eq!(geometry.cell_at(last.x + last.width + 1, last.y), None);
    }

    #[test]
    fn test_renders_alive_and_dead_cells() {
        let board = test_board(&[(0, 0)], &[]);
        let mut term = TestTerminal::with_size(40, 20);
        let area = term.area();
        term.render_widget(GridView::new(Some(&board)), area);

        let geometry = GridGeometry::fit(Rect::new(1, 1, 38, 18)).unwrap();
        let alive = geometry.cell_rect(0, 0);
        let dead = geometry.cell_rect(0, 1);

        assert_eq!(term.cell_at(alive.x, alive.y), Some("█"));
        assert_eq!(
            term.cell_at(dead.x + dead.width / 2, dead.y + dead.height / 2),
            Some("·")
        );
        assert!(term.buffer_contains("Board"));
    }

    #[test]
    fn test_death_marker_only_while_highlighted() {
        // (2, 2) died in the last render
        let board = test_board(&[], &[(2, 2)]);
        let geometry = GridGeometry::fit(Rect::new(1, 1, 38, 18)).unwrap();
        let died = geometry.cell_rect(2, 2);
        let center = (died.x + died.width / 2, died.y + died.height / 2);

        let mut term = TestTerminal::with_size(40, 20);
        let area = term.area();
        term.render_widget(GridView::new(Some(&board)), area);
        assert_eq!(term.cell_at(center.0, center.1), Some("×"));

        term.render_widget(GridView::new(Some(&board)).highlight_changes(false), area);
        assert_eq!(term.cell_at(center.0, center.1), Some("·"));
    }

    #[test]
    fn test_extinct_board_is_labelled() {
        let mut term = TestTerminal::new();
        let area = term.area();

        term.render_widget(GridView::new(Some(&test_board(&[], &[]))), area);
        assert!(term.buffer_contains("Board · extinct"));

        term.render_widget(GridView::new(Some(&test_board(&[(1, 1)], &[]))), area);
        assert!(!term.buffer_contains("extinct"));
    }

    #[test]
    fn test_placeholder_before_first_state() {
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(GridView::new(None), area);

        assert!(term.buffer_contains("Waiting for the game server"));
    }

    #[test]
    fn test_busy_label_in_border() {
        let board = test_board(&[], &[]);
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(GridView::new(Some(&board)).busy(Some("next")), area);

        assert!(term.buffer_contains("⟳ next"));
    }
}
