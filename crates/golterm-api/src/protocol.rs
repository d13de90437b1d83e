//! Wire types and endpoint paths of the game server REST API

use serde::{Deserialize, Serialize};

/// Endpoint paths, relative to the server base URL
pub mod paths {
    /// `GET` - current generation, live cell count and grid
    pub const STATE: &str = "api/game/state";
    /// `POST` - advance one generation
    pub const NEXT: &str = "api/game/next";
    /// `POST` - clear the board and the generation counter
    pub const RESET: &str = "api/game/reset";
    /// `POST` - fill the board randomly
    pub const RANDOM: &str = "api/game/random";
    /// `POST` - seed the server's preset pattern
    pub const PATTERN: &str = "api/game/pattern";
    /// `POST` with a [`super::CellUpdate`] body - set one cell
    pub const CELL: &str = "api/game/cell";
}

/// Body of `POST /api/game/cell`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellUpdate {
    pub row: usize,
    pub col: usize,
    /// Desired value of the cell after the call
    pub alive: bool,
}

impl CellUpdate {
    pub fn new(row: usize, col: usize, alive: bool) -> Self {
        Self { row, col, alive }
    }
}
