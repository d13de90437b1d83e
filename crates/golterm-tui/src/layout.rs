//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Title, server address, auto-play indicator
    pub header: Rect,

    /// Generation, live cells, survival rate, speed
    pub stats: Rect,

    /// Grid panel (takes the remaining height)
    pub board: Rect,

    /// Key-hint footer
    pub hints: Rect,
}

/// Split the terminal into header, stats row, board and footer
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Length(3), // Stats row (glass container)
        Constraint::Min(3),    // Board
        Constraint::Length(1), // Key hints, no border
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        stats: chunks[1],
        board: chunks[2],
        hints: chunks[3],
    }
}
