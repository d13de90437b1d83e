//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes

pub(crate) mod keys;
pub(crate) mod update;


use crate::message::Message;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Mutating game requests, each one a round-trip to the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// `POST /api/game/next`
    Advance,
    /// `POST /api/game/reset`
    Reset,
    /// `POST /api/game/random`
    Randomize,
    /// `POST /api/game/pattern`
    ApplyPattern,
    /// Read the cell, then `POST /api/game/cell` with its negation
    ToggleCell { row: usize, col: usize },
}

impl GameAction {
    /// Whether the action replaces the whole board, so the next render must
    /// not be diffed against the old grid
    pub fn clears_snapshot(&self) -> bool {
        matches!(
            self,
            GameAction::Reset | GameAction::Randomize | GameAction::ApplyPattern
        )
    }

    /// Toast shown when the action succeeds
    pub fn success_message(&self) -> Option<&'static str> {
        match self {
            GameAction::Advance => Some("Generation computed"),
            GameAction::Reset => Some("Board reset"),
            GameAction::Randomize => Some("Random board generated"),
            GameAction::ApplyPattern => Some("Initial pattern applied"),
            GameAction::ToggleCell { .. } => None,
        }
    }

    /// Toast shown when the action fails
    pub fn failure_message(&self) -> &'static str {
        match self {
            GameAction::Advance => "Failed to compute the next generation",
            GameAction::Reset => "Failed to reset the board",
            GameAction::Randomize => "Failed to generate a random board",
            GameAction::ApplyPattern => "Failed to apply the pattern",
            GameAction::ToggleCell { .. } => "Failed to toggle the cell",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GameAction::Advance => "next",
            GameAction::Reset => "reset",
            GameAction::Randomize => "random",
            GameAction::ApplyPattern => "pattern",
            GameAction::ToggleCell { .. } => "toggle",
        }
    }
}

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Read the server state (`RefreshView`)
    FetchState,

    /// Run a mutating request followed by a state read. The busy guard is
    /// already taken when this is returned.
    RunGameAction(GameAction),

    /// Start the auto-play timer, replacing any running one
    StartAutoPlayTimer { period_ms: u64 },

    /// Abort the auto-play timer
    StopAutoPlayTimer,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
