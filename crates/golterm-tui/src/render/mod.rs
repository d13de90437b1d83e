//! Main render/view function (View in TEA pattern)


use chrono::{DateTime, Local};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use golterm_app::{AppState, UiMode};

use super::{layout, widgets};
use crate::theme::palette;
use crate::widgets::GridGeometry;

/// How long births and deaths stay highlighted after a render
pub const CHANGE_HIGHLIGHT_MS: i64 = 600;

/// Render the complete UI (View function in TEA)
///
/// Returns where the grid cells were drawn, for mouse hit-testing. `None`
/// when no board is shown.
pub fn view(frame: &mut Frame, state: &AppState) -> Option<GridGeometry> {
    view_at(frame, state, Local::now())
}

/// [`view`] with an explicit clock
pub fn view_at(frame: &mut Frame, state: &AppState, now: DateTime<Local>) -> Option<GridGeometry> {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    let header = widgets::MainHeader::new(&state.server_url)
        .connection(state.phase, state.server_reachable)
        .auto_play(state.auto_play);
    frame.render_widget(header, areas.header);

    frame.render_widget(
        widgets::StatsBar::new(state.game(), state.speed.ms()),
        areas.stats,
    );

    let highlight = state.board.as_ref().is_some_and(|board| {
        now.signed_duration_since(board.rendered_at)
            < chrono::Duration::milliseconds(CHANGE_HIGHLIGHT_MS)
    });
    let grid = widgets::GridView::new(state.board.as_ref())
        .cursor((state.ui_mode == UiMode::Normal).then_some(state.cursor))
        .highlight_changes(highlight)
        .busy(state.busy_action().map(|action| action.label()));
    frame.render_widget(grid, areas.board);

    frame.render_widget(widgets::KeyHints::new(state.ui_mode), areas.hints);

    if state.ui_mode == UiMode::SpeedInput {
        frame.render_widget(
            widgets::SpeedPrompt::new(&state.speed_input, &state.speed),
            area,
        );
    }

    // Toasts float above everything else
    frame.render_widget(widgets::ToastStack::new(&state.toasts), area);

    if state.board.is_none() {
        return None;
    }
    let grid_inner = Block::default().borders(Borders::ALL).inner(areas.board);
    GridGeometry::fit(grid_inner)
}
