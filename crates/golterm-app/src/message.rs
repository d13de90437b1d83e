//! Message types for the application (TEA pattern)

use golterm_core::GameState;

use crate::handler::GameAction;
use crate::input_key::InputKey;

/// Direction for the keyboard cell cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Up,
    Down,
    Left,
    Right,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (toast expiry)
    Tick,

    /// Quit immediately (q, Esc, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Game Intents
    // ─────────────────────────────────────────────────────────
    /// Re-read the server state and redraw (skipped while busy)
    RefreshView,
    /// Advance one generation
    AdvanceGeneration,
    /// Clear the board on the server
    ResetBoard,
    /// Fill the board randomly on the server
    RandomizeBoard,
    /// Seed the server's preset pattern
    ApplyPattern,
    /// Flip one cell (mouse click or cursor)
    ToggleCell { row: usize, col: usize },
    /// Flip the cell under the keyboard cursor
    ToggleCellAtCursor,
    /// Move the keyboard cursor one cell
    MoveCursor(CursorMove),

    // ─────────────────────────────────────────────────────────
    // Auto-play
    // ─────────────────────────────────────────────────────────
    StartAutoPlay,
    StopAutoPlay,
    ToggleAutoPlay,
    /// Fired by the auto-play timer every period
    AutoPlayTick,
    /// Set the auto-play period in milliseconds (clamped)
    SetSpeed { ms: u64 },
    /// Shorter period by one step
    SpeedUp,
    /// Longer period by one step
    SpeedDown,

    // ─────────────────────────────────────────────────────────
    // Speed Prompt
    // ─────────────────────────────────────────────────────────
    /// Open the typed speed prompt
    OpenSpeedInput,
    /// Replace the prompt text
    SpeedInput { text: String },
    /// Apply the typed speed and close the prompt
    SubmitSpeedInput,
    /// Close the prompt without applying
    CancelSpeedInput,

    // ─────────────────────────────────────────────────────────
    // Background Task Results
    // ─────────────────────────────────────────────────────────
    /// `GET /api/game/state` succeeded
    StateFetched { state: GameState },
    /// `GET /api/game/state` failed (transport, status or decode)
    StateFetchFailed { error: String },
    /// A mutating action succeeded; `refresh` is the follow-up state read
    GameActionCompleted {
        action: GameAction,
        refresh: Result<GameState, String>,
    },
    /// A mutating action failed; no refresh was attempted
    GameActionFailed { action: GameAction, error: String },
}
