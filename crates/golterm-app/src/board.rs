//! Rendered board model
//!
//! `render_grid` is the only place the previous-grid snapshot is read and
//! overwritten. The TUI draws a [`RenderedBoard`]; it never diffs by itself.

use chrono::{DateTime, Local};
use golterm_core::{diff_grids, CellChange, GameState, Grid};

/// What the grid panel shows: the last fetched state plus the cells that
/// changed since the render before it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedBoard {
    pub state: GameState,
    /// Births and deaths relative to the previous snapshot, row-major
    pub changes: Vec<CellChange>,
    pub rendered_at: DateTime<Local>,
}

impl RenderedBoard {
    /// Change recorded for `(row, col)` in this render, if any
    pub fn change_at(&self, row: usize, col: usize) -> Option<&CellChange> {
        self.changes.iter().find(|c| c.row == row && c.col == col)
    }

    pub fn births(&self) -> usize {
        self.changes.iter().filter(|c| c.born).count()
    }

    pub fn deaths(&self) -> usize {
        self.changes.iter().filter(|c| !c.born).count()
    }
}

/// Diff `state` against the stored snapshot, then replace the snapshot with
/// the new grid.
pub fn render_grid(snapshot: &mut Option<Grid>, state: GameState) -> RenderedBoard {
    let changes = diff_grids(snapshot.as_ref(), &state.grid);
    *snapshot = Some(state.grid);

    RenderedBoard {
        state,
        changes,
        rendered_at: Local::now(),
    }
}
