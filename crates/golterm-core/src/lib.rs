//! # golterm-core - Core Domain Types
//!
//! Foundation crate for golterm. Provides the game state model, snapshot
//! diffing, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`GameState`] - Server-owned state: generation, live cell count, 5x5 grid
//! - [`Grid`] - Fixed 5x5 boolean matrix, 0-indexed `(row, col)`
//! - [`CellChange`] - One coordinate whose value changed between two renders
//!
//! ### Diffing (`diff`)
//! - [`diff_grids()`] - Compute the set of changed cells between two grids
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum; `is_api_error()` separates game server failures from local ones
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use golterm_core::prelude::*;
//! ```

pub mod diff;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use diff::diff_grids;
pub use error::{Error, Result, ResultExt};
pub use types::{survival_rate, CellChange, GameState, Grid, GRID_CELLS, GRID_SIZE};
