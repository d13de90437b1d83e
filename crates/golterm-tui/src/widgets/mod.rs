//! Custom widget components

mod grid;
mod header;
mod key_hints;
pub mod modal_overlay;
mod speed_prompt;
mod stats;
mod toasts;

pub use grid::{GridGeometry, GridView};
pub use header::MainHeader;
pub use key_hints::KeyHints;
pub use speed_prompt::SpeedPrompt;
pub use stats::StatsBar;
pub use toasts::{ToastStack, MAX_VISIBLE_TOASTS};
