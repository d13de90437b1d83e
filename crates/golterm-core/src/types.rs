//! Game state model shared by the API client, the controller and the TUI

use serde::{Deserialize, Serialize};

/// Width and height of the board. The server always serves a square 5x5 grid.
pub const GRID_SIZE: usize = 5;

/// Total number of cells on the board.
pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Row-major 5x5 board, `grid[row][col]`, `true` = alive.
///
/// The fixed-size array makes a malformed server response (wrong row or
/// column count) a decode error instead of a runtime index panic.
pub type Grid = [[bool; GRID_SIZE]; GRID_SIZE];

/// Snapshot of the server-side game as returned by `GET /api/game/state`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Number of generations computed since the last reset.
    pub generation: u64,
    /// Number of alive cells, as counted by the server.
    pub live_cells: u32,
    /// The board itself.
    pub grid: Grid,
}

impl GameState {
    /// Value of the cell at `(row, col)`, `None` when out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<bool> {
        self.grid.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Survival rate shown in the stats panel, in percent.
    pub fn survival_rate(&self) -> u32 {
        survival_rate(self.live_cells)
    }

    /// Whether every cell on the board is dead.
    pub fn is_extinct(&self) -> bool {
        self.grid.iter().flatten().all(|alive| !alive)
    }
}

/// `round(live_cells / 25 * 100)`.
///
/// Counts above the board size are not clamped: the server is the source of
/// truth and a bogus count is displayed as-is.
pub fn survival_rate(live_cells: u32) -> u32 {
    ((live_cells as f64 / GRID_CELLS as f64) * 100.0).round() as u32
}

/// A cell whose value differs between the previously rendered grid and the
/// newly fetched one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellChange {
    pub row: usize,
    pub col: usize,
    /// New value of the cell: `true` for a birth, `false` for a death.
    pub born: bool,
}
