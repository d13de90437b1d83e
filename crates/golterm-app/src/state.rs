//! Application state (Model in TEA pattern)

use golterm_core::{GameState, Grid, GRID_SIZE};

use crate::autoplay::{AutoPlay, SpeedControl};
use crate::board::{render_grid, RenderedBoard};
use crate::config::Settings;
use crate::handler::GameAction;
use crate::message::CursorMove;
use crate::notification::{Severity, Toasts};

/// Lifecycle phase of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// No state has been fetched yet
    #[default]
    Initializing,
    Running,
    Quitting,
}

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Board view, single-key shortcuts active
    #[default]
    Normal,
    /// Typed speed prompt; shortcuts are suspended
    SpeedInput,
}

/// Busy guard for mutating server requests
///
/// Only one mutating request is in flight at a time. The completion message
/// of that request always returns the guard to `Idle`, whether it succeeded
/// or failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activity {
    #[default]
    Idle,
    Busy(GameAction),
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub ui_mode: UiMode,

    /// Base URL the client talks to, for display
    pub server_url: String,

    /// Whether the last state read reached the server
    pub server_reachable: bool,

    pub activity: Activity,

    pub speed: SpeedControl,
    pub auto_play: AutoPlay,

    /// Grid of the last render, `None` until the first render or after a
    /// board-replacing action
    pub snapshot: Option<Grid>,

    /// What the grid panel draws
    pub board: Option<RenderedBoard>,

    /// Keyboard cell cursor as (row, col)
    pub cursor: (usize, usize),

    pub toasts: Toasts,

    /// Text buffer of the speed prompt
    pub speed_input: String,

    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Initializing,
            ui_mode: UiMode::Normal,
            server_url: settings.api.base_url.clone(),
            server_reachable: false,
            activity: Activity::Idle,
            speed: SpeedControl::from_settings(&settings.auto_play),
            auto_play: AutoPlay::Stopped,
            snapshot: None,
            board: None,
            cursor: (GRID_SIZE / 2, GRID_SIZE / 2),
            toasts: Toasts::new(settings.ui.toast_duration()),
            speed_input: String::new(),
            settings,
        }
    }

    /// Show a toast
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        tracing::debug!("notify [{}]: {}", severity.label(), message);
        self.toasts.push(message, severity);
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.activity, Activity::Busy(_))
    }

    /// Action currently holding the busy guard
    pub fn busy_action(&self) -> Option<GameAction> {
        match self.activity {
            Activity::Busy(action) => Some(action),
            Activity::Idle => None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Last fetched game state, if any
    pub fn game(&self) -> Option<&GameState> {
        self.board.as_ref().map(|b| &b.state)
    }

    /// Render a freshly fetched state into the board
    pub fn apply_state(&mut self, state: GameState) {
        self.board = Some(render_grid(&mut self.snapshot, state));
        self.server_reachable = true;
        if self.phase == AppPhase::Initializing {
            self.phase = AppPhase::Running;
        }
    }

    pub fn move_cursor(&mut self, direction: CursorMove) {
        let (row, col) = self.cursor;
        let last = GRID_SIZE - 1;
        self.cursor = match direction {
            CursorMove::Up => (row.saturating_sub(1), col),
            CursorMove::Down => ((row + 1).min(last), col),
            CursorMove::Left => (row, col.saturating_sub(1)),
            CursorMove::Right => (row, (col + 1).min(last)),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let state = AppState::new();

        assert_eq!(state.phase, AppPhase::Initializing);
        assert_eq!(state.ui_mode, UiMode::Normal);
        assert_eq!(state.activity, Activity::Idle);
        assert_eq!(state.auto_play, AutoPlay::Stopped);
        assert_eq!(state.speed.ms(), 1000);
        assert_eq!(state.server_url, "http://localhost:8080");
        assert!(state.snapshot.is_none());
        assert!(state.board.is_none());
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn test_apply_state_enters_running_and_stores_snapshot() {
        let mut state = AppState::new();
        let mut game = GameState::default();
        game.grid[0][0] = true;
        game.live_cells = 1;

        state.apply_state(game.clone());

        assert_eq!(state.phase, AppPhase::Running);
        assert!(state.server_reachable);
        assert_eq!(state.snapshot, Some(game.grid));
        assert_eq!(state.game(), Some(&game));
    }

    #[test]
    fn test_cursor_stays_on_board() {
        let mut state = AppState::new();
        state.cursor = (0, 0);

        state.move_cursor(CursorMove::Up);
        state.move_cursor(CursorMove::Left);
        assert_eq!(state.cursor, (0, 0));

        for _ in 0..10 {
            state.move_cursor(CursorMove::Down);
            state.move_cursor(CursorMove::Right);
        }
        assert_eq!(state.cursor, (GRID_SIZE - 1, GRID_SIZE - 1));
    }

    #[test]
    fn test_busy_action() {
        let mut state = AppState::new();
        assert!(!state.is_busy());
        assert_eq!(state.busy_action(), None);

        state.activity = Activity::Busy(GameAction::Advance);
        assert!(state.is_busy());
        assert_eq!(state.busy_action(), Some(GameAction::Advance));
    }

    #[test]
    fn test_quit_phase() {
        let mut state = AppState::new();
        assert!(!state.should_quit());
        state.phase = AppPhase::Quitting;
        assert!(state.should_quit());
    }
}
