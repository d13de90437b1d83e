//! # golterm-api - Game of Life server client
//!
//! Talks JSON over HTTP to the co-located game server. The server owns the
//! simulation; this crate only reads its state and asks it to mutate.
//!
//! ## Public API
//!
//! - [`GameApi`] - async trait implemented by every backend (`Send` futures)
//! - [`HttpGameApi`] - reqwest-backed implementation
//! - [`CellUpdate`] - body of `POST /api/game/cell`
//! - [`paths`] - endpoint paths relative to the server base URL
//!
//! With the `test-helpers` feature, [`test_utils::RecordingGameApi`] provides
//! an in-memory fake that records every call.

pub mod client;
pub mod protocol;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{GameApi, HttpGameApi, LocalGameApi, DEFAULT_BASE_URL};
pub use protocol::{paths, CellUpdate};
