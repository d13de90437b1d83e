//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use golterm_core::{GameState, GRID_SIZE};
use tracing::{debug, info, trace, warn};

use crate::autoplay::{AutoPlay, SpeedControl};
use crate::message::Message;
use crate::notification::Severity;
use crate::state::{Activity, AppPhase, AppState, UiMode};

use super::{keys::handle_key, GameAction, UpdateAction, UpdateResult};

/// Toast shown whenever a state read fails
pub(crate) const CONNECTION_ERROR: &str = "Could not reach the game API";

/// Shown when auto-play stops on an empty board
pub(crate) const EXTINCT_STOP: &str = "All cells died, auto-play stopped";

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            if state.auto_play.is_running() {
                state.auto_play = AutoPlay::Stopped;
                return UpdateResult::action(UpdateAction::StopAutoPlayTimer);
            }
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            let removed = state.toasts.prune_expired(Instant::now());
            if removed > 0 {
                debug!("Pruned {} expired toast(s)", removed);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Game Intents
        // ─────────────────────────────────────────────────────────
        Message::RefreshView => {
            if let Some(action) = state.busy_action() {
                debug!("Refresh skipped: '{}' in progress", action.label());
                return UpdateResult::none();
            }
            UpdateResult::action(UpdateAction::FetchState)
        }

        Message::AdvanceGeneration => start_game_action(state, GameAction::Advance),
        Message::ResetBoard => start_game_action(state, GameAction::Reset),
        Message::RandomizeBoard => start_game_action(state, GameAction::Randomize),
        Message::ApplyPattern => start_game_action(state, GameAction::ApplyPattern),

        Message::ToggleCell { row, col } => {
            if row >= GRID_SIZE || col >= GRID_SIZE {
                state.notify(
                    format!(
                        "Cell ({}, {}) is outside the board (0-{})",
                        row,
                        col,
                        GRID_SIZE - 1
                    ),
                    Severity::Warning,
                );
                return UpdateResult::none();
            }
            start_game_action(state, GameAction::ToggleCell { row, col })
        }

        Message::ToggleCellAtCursor => {
            let (row, col) = state.cursor;
            UpdateResult::message(Message::ToggleCell { row, col })
        }

        Message::MoveCursor(direction) => {
            state.move_cursor(direction);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Auto-play
        // ─────────────────────────────────────────────────────────
        Message::StartAutoPlay => {
            if state.auto_play.is_running() {
                return UpdateResult::none();
            }
            let period_ms = state.speed.ms();
            state.auto_play = AutoPlay::Running { period_ms };
            state.notify(
                format!("Auto-play started ({}ms)", period_ms),
                Severity::Success,
            );
            UpdateResult::action(UpdateAction::StartAutoPlayTimer { period_ms })
        }

        Message::StopAutoPlay => {
            if !state.auto_play.is_running() {
                return UpdateResult::none();
            }
            state.auto_play = AutoPlay::Stopped;
            state.notify("Auto-play stopped", Severity::Warning);
            UpdateResult::action(UpdateAction::StopAutoPlayTimer)
        }

        Message::ToggleAutoPlay => {
            if state.auto_play.is_running() {
                UpdateResult::message(Message::StopAutoPlay)
            } else {
                UpdateResult::message(Message::StartAutoPlay)
            }
        }

        Message::AutoPlayTick => {
            // A tick can still be queued after the timer was aborted
            if !state.auto_play.is_running() {
                return UpdateResult::none();
            }
            // Slow server: drop the tick rather than queue generations
            if state.is_busy() {
                trace!("Auto-play tick skipped, request in flight");
                return UpdateResult::none();
            }
            UpdateResult::message(Message::AdvanceGeneration)
        }

        Message::SetSpeed { ms } => change_speed(state, |speed| speed.set(ms)),
        Message::SpeedUp => change_speed(state, SpeedControl::faster),
        Message::SpeedDown => change_speed(state, SpeedControl::slower),

        // ─────────────────────────────────────────────────────────
        // Speed Prompt
        // ─────────────────────────────────────────────────────────
        Message::OpenSpeedInput => {
            state.ui_mode = UiMode::SpeedInput;
            state.speed_input = state.speed.ms().to_string();
            UpdateResult::none()
        }

        Message::SpeedInput { text } => {
            state.speed_input = text;
            UpdateResult::none()
        }

        Message::SubmitSpeedInput => {
            state.ui_mode = UiMode::Normal;
            let text = std::mem::take(&mut state.speed_input);
            match text.trim().parse::<u64>() {
                Ok(ms) => UpdateResult::message(Message::SetSpeed { ms }),
                Err(_) => {
                    state.notify(format!("Invalid speed: '{}'", text), Severity::Warning);
                    UpdateResult::none()
                }
            }
        }

        Message::CancelSpeedInput => {
            state.ui_mode = UiMode::Normal;
            state.speed_input.clear();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Background Task Results
        // ─────────────────────────────────────────────────────────
        Message::StateFetched { state: game } => {
            state.apply_state(game);
            UpdateResult::none()
        }

        Message::StateFetchFailed { error } => {
            handle_fetch_failure(state, &error);
            UpdateResult::none()
        }

        Message::GameActionCompleted { action, refresh } => {
            handle_game_action_completed(state, action, refresh)
        }

        Message::GameActionFailed { action, error } => {
            state.activity = Activity::Idle;
            warn!("'{}' request failed: {}", action.label(), error);
            state.notify(action.failure_message(), Severity::Danger);
            UpdateResult::none()
        }
    }
}

/// Take the busy guard and dispatch a mutating request, or ignore the
/// intent if another one is in flight
fn start_game_action(state: &mut AppState, action: GameAction) -> UpdateResult {
    if let Some(current) = state.busy_action() {
        debug!(
            "Ignoring '{}': '{}' still in progress",
            action.label(),
            current.label()
        );
        return UpdateResult::none();
    }

    state.activity = Activity::Busy(action);
    UpdateResult::action(UpdateAction::RunGameAction(action))
}

/// Apply a speed change; a running timer is restarted at the new period
fn change_speed(state: &mut AppState, change: impl FnOnce(&mut SpeedControl) -> bool) -> UpdateResult {
    if !change(&mut state.speed) {
        return UpdateResult::none();
    }

    let period_ms = state.speed.ms();
    debug!("Auto-play speed set to {}ms", period_ms);

    if !state.auto_play.is_running() {
        return UpdateResult::none();
    }

    state.auto_play = AutoPlay::Running { period_ms };
    state.notify(format!("Auto-play speed {}ms", period_ms), Severity::Info);
    UpdateResult::action(UpdateAction::StartAutoPlayTimer { period_ms })
}

fn handle_fetch_failure(state: &mut AppState, error: &str) {
    warn!("State fetch failed: {}", error);
    state.server_reachable = false;
    state.notify(CONNECTION_ERROR, Severity::Danger);
}

/// Completion of a mutating request. Always releases the busy guard.
///
/// Auto-play stops by itself once the refreshed board has no live cell.
fn handle_game_action_completed(
    state: &mut AppState,
    action: GameAction,
    refresh: Result<GameState, String>,
) -> UpdateResult {
    state.activity = Activity::Idle;

    if action.clears_snapshot() {
        state.snapshot = None;
    }

    let extinct = match refresh {
        Ok(game) => {
            let extinct = game.is_extinct();
            state.apply_state(game);
            extinct
        }
        Err(error) => {
            handle_fetch_failure(state, &error);
            false
        }
    };

    if let Some(message) = action.success_message() {
        state.notify(message, Severity::Success);
    }

    if extinct && state.auto_play.is_running() {
        info!("Board is extinct, stopping auto-play");
        state.auto_play = AutoPlay::Stopped;
        state.notify(EXTINCT_STOP, Severity::Warning);
        return UpdateResult::action(UpdateAction::StopAutoPlayTimer);
    }
    UpdateResult::none()
}
