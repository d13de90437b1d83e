//! Engine - owns the controller state, the message channel and the API handle
//!
//! The TUI runner drives the engine: it feeds input `Message`s, drains task
//! results with [`Engine::drain_pending_messages`] and renders
//! [`Engine::state`]. Tests drive it the same way with an in-memory
//! [`GameApi`].

use std::sync::Arc;

use golterm_api::GameApi;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::autoplay::AutoPlayTimer;
use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Capacity of the unified message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for golterm, generic over the game server backend
pub struct Engine<A> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, timer, tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    api: Arc<A>,

    timer: AutoPlayTimer,

    signal_task: Option<JoinHandle<()>>,

    /// Settings the engine was created with
    pub settings: Settings,
}

impl<A> Engine<A>
where
    A: GameApi + Sync + 'static,
{
    pub fn new(settings: Settings, api: A) -> Self {
        Self::with_shared_api(settings, Arc::new(api))
    }

    pub fn with_shared_api(settings: Settings, api: Arc<A>) -> Self {
        let state = AppState::with_settings(settings.clone());
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);

        Self {
            state,
            msg_tx,
            msg_rx,
            api,
            timer: AutoPlayTimer::new(),
            signal_task: None,
            settings,
        }
    }

    /// Issue the initial state read
    pub fn start(&mut self) {
        info!("Connecting to {}", self.state.server_url);
        self.process_message(Message::RefreshView);
    }

    /// Forward SIGTERM/SIGHUP (and SIGINT outside raw mode) as `Message::Quit`
    pub fn install_signal_handler(&mut self) {
        if self.signal_task.is_none() {
            self.signal_task = Some(signals::spawn_signal_handler(self.msg_tx.clone()));
        }
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(
            &mut self.state,
            msg,
            &self.api,
            &self.msg_tx,
            &mut self.timer,
        );
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message from a task or the timer and process it.
    ///
    /// Returns `false` once every sender is gone.
    pub async fn process_next_message(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    pub fn api(&self) -> &Arc<A> {
        &self.api
    }

    /// Whether the auto-play timer task is alive
    pub fn auto_play_timer_active(&self) -> bool {
        self.timer.is_active()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Stop the timer and the signal listener. In-flight requests are left
    /// to finish on their own; their results are dropped with the channel.
    pub fn shutdown(&mut self) {
        debug!("Engine shutting down");
        self.timer.stop();
        if let Some(handle) = self.signal_task.take() {
            handle.abort();
        }
    }
}
