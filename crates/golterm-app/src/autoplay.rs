//! Auto-play: state machine, speed control and the repeating timer task
//!
//! The state machine (`AutoPlay`) lives in `AppState` and is only changed by
//! the update function. The timer task is owned by the engine's
//! `AutoPlayTimer` and is started/aborted through `UpdateAction`s, so there is
//! never more than one task posting `Message::AutoPlayTick`.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, trace};

use crate::config::AutoPlaySettings;
use crate::message::Message;

/// Auto-play state machine: `Stopped` <-> `Running`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoPlay {
    #[default]
    Stopped,
    Running {
        /// Period the active timer was started with
        period_ms: u64,
    },
}

impl AutoPlay {
    pub fn is_running(&self) -> bool {
        matches!(self, AutoPlay::Running { .. })
    }
}

/// The speed "slider": an auto-play period clamped to a range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedControl {
    ms: u64,
    pub min_ms: u64,
    pub max_ms: u64,
    pub step_ms: u64,
}

impl Default for SpeedControl {
    fn default() -> Self {
        Self::from_settings(&AutoPlaySettings::default())
    }
}

impl SpeedControl {
    pub fn from_settings(settings: &AutoPlaySettings) -> Self {
        let min_ms = settings.min_speed_ms.max(1);
        let max_ms = settings.max_speed_ms.max(min_ms);
        let mut control = Self {
            ms: min_ms,
            min_ms,
            max_ms,
            step_ms: settings.speed_step_ms.max(1),
        };
        control.set(settings.speed_ms);
        control
    }

    /// Current period in milliseconds
    pub fn ms(&self) -> u64 {
        self.ms
    }

    pub fn period(&self) -> Duration {
        Duration::from_millis(self.ms)
    }

    /// Set the period, clamped to `[min_ms, max_ms]`; returns whether it changed
    pub fn set(&mut self, ms: u64) -> bool {
        let clamped = ms.clamp(self.min_ms, self.max_ms);
        let changed = clamped != self.ms;
        self.ms = clamped;
        changed
    }

    /// Shorter period (faster); returns whether it changed
    pub fn faster(&mut self) -> bool {
        self.set(self.ms.saturating_sub(self.step_ms))
    }

    /// Longer period (slower); returns whether it changed
    pub fn slower(&mut self) -> bool {
        self.set(self.ms.saturating_add(self.step_ms))
    }
}

/// Handle to the repeating timer task
#[derive(Debug, Default)]
pub struct AutoPlayTimer {
    handle: Option<JoinHandle<()>>,
}

impl AutoPlayTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)start the timer. Any previous task is aborted first, so a restart
    /// at a new period never leaves two timers ticking.
    pub fn start(&mut self, period: Duration, msg_tx: mpsc::Sender<Message>) {
        self.stop();
        debug!("Starting auto-play timer ({}ms)", period.as_millis());

        let handle = tokio::spawn(async move {
            // First tick one full period after start, like a browser interval
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                trace!("Auto-play tick");
                if msg_tx.send(Message::AutoPlayTick).await.is_err() {
                    break;
                }
            }
        });
        self.handle = Some(handle);
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            debug!("Stopping auto-play timer");
            handle.abort();
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for AutoPlayTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
