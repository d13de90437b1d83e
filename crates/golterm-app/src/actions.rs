//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every network round-trip runs in its own tokio task and reports back with
//! exactly one completion `Message`, so the update loop never awaits.

use std::sync::Arc;
use std::time::Duration;

use golterm_api::{CellUpdate, GameApi};
use golterm_core::prelude::*;
use tokio::sync::mpsc;

use crate::autoplay::AutoPlayTimer;
use crate::handler::{GameAction, UpdateAction};
use crate::message::Message;

/// Execute an action by spawning a background task
pub fn handle_action<A>(
    action: UpdateAction,
    api: &Arc<A>,
    msg_tx: mpsc::Sender<Message>,
    timer: &mut AutoPlayTimer,
) where
    A: GameApi + Sync + 'static,
{
    match action {
        UpdateAction::FetchState => {
            let api = Arc::clone(api);
            tokio::spawn(async move {
                let msg = fetch_state(api.as_ref()).await;
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::RunGameAction(game_action) => {
            let api = Arc::clone(api);
            tokio::spawn(async move {
                let msg = run_game_action(api.as_ref(), game_action).await;
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::StartAutoPlayTimer { period_ms } => {
            timer.start(Duration::from_millis(period_ms), msg_tx);
        }

        UpdateAction::StopAutoPlayTimer => {
            timer.stop();
        }
    }
}

async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if msg_tx.send(msg).await.is_err() {
        // Receiver gone: the app is shutting down
        debug!("Dropped task result, message channel closed");
    }
}

/// Read the server state
///
/// Any failure (transport, status, decode) becomes `StateFetchFailed`.
pub async fn fetch_state<A: GameApi>(api: &A) -> Message {
    match api.state().await {
        Ok(state) => {
            trace!(
                "Fetched generation {} ({} live)",
                state.generation,
                state.live_cells
            );
            Message::StateFetched { state }
        }
        Err(e) => {
            warn!("Failed to fetch game state: {}", e);
            Message::StateFetchFailed {
                error: e.to_string(),
            }
        }
    }
}

/// Run a mutating request, then re-read the state
///
/// The result always carries `action` so the update loop can release the
/// busy guard, whichever path completed.
pub async fn run_game_action<A: GameApi>(api: &A, action: GameAction) -> Message {
    if let Err(e) = perform(api, action).await {
        if e.is_api_error() {
            warn!("'{}' failed: {}", action.label(), e);
        } else {
            error!("'{}' failed: {}", action.label(), e);
        }
        return Message::GameActionFailed {
            action,
            error: e.to_string(),
        };
    }

    debug!("'{}' succeeded, refreshing", action.label());
    let refresh = api.state().await.map_err(|e| {
        warn!("Refresh after '{}' failed: {}", action.label(), e);
        e.to_string()
    });

    Message::GameActionCompleted { action, refresh }
}

async fn perform<A: GameApi>(api: &A, action: GameAction) -> Result<()> {
    match action {
        GameAction::Advance => api.next().await,
        GameAction::Reset => api.reset().await,
        GameAction::Randomize => api.randomize().await,
        GameAction::ApplyPattern => api.pattern().await,
        GameAction::ToggleCell { row, col } => {
            // Not atomic: another client may change the cell in between
            let current = api.state().await?;
            let alive = current
                .cell(row, col)
                .ok_or(Error::CellOutOfBounds { row, col })?;
            api.set_cell(CellUpdate::new(row, col, !alive)).await
        }
    }
}
