//! Message processing (TEA loop)

use std::sync::Arc;

use golterm_api::GameApi;
use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::autoplay::AutoPlayTimer;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
///
/// Follow-up messages are processed immediately; actions are dispatched as
/// they are produced.
pub fn process_message<A>(
    state: &mut AppState,
    message: Message,
    api: &Arc<A>,
    msg_tx: &mpsc::Sender<Message>,
    timer: &mut AutoPlayTimer,
) where
    A: GameApi + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, api, msg_tx.clone(), timer);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
