//! Configuration file parsing for golterm
//!
//! Supports a single TOML file, by default
//! `$XDG_CONFIG_HOME/golterm/config.toml`.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings};
pub use types::*;
