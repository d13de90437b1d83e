//! golterm-app - Application state and orchestration for golterm
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the game
//! controller: [`AppState`] is the model, [`Message`] the only mutation
//! surface, [`handler::update`] the pure transition function, and
//! [`UpdateAction`]s are dispatched as async tasks against an injected
//! [`golterm_api::GameApi`]. Nothing here depends on a terminal library.

pub mod actions;
pub mod autoplay;
pub mod board;
pub mod config;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod notification;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use autoplay::{AutoPlay, AutoPlayTimer, SpeedControl};
pub use board::{render_grid, RenderedBoard};
pub use engine::Engine;
pub use handler::{GameAction, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use notification::{Severity, Toast, Toasts};
pub use state::{Activity, AppPhase, AppState, UiMode};
