//! Configuration types for golterm

use std::time::Duration;

use serde::{Deserialize, Serialize};

use golterm_api::DEFAULT_BASE_URL;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub auto_play: AutoPlaySettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Game server connection settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL of the game server (endpoints live under `api/game/`)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Overall request timeout in milliseconds; 0 keeps the transport default
    #[serde(default)]
    pub timeout_ms: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: 0,
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}

/// Auto-play period and speed control range
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AutoPlaySettings {
    /// Initial auto-play period in milliseconds
    #[serde(default = "default_speed_ms")]
    pub speed_ms: u64,

    #[serde(default = "default_min_speed_ms")]
    pub min_speed_ms: u64,

    #[serde(default = "default_max_speed_ms")]
    pub max_speed_ms: u64,

    /// Increment used by `+` / `-`
    #[serde(default = "default_speed_step_ms")]
    pub speed_step_ms: u64,
}

impl Default for AutoPlaySettings {
    fn default() -> Self {
        Self {
            speed_ms: default_speed_ms(),
            min_speed_ms: default_min_speed_ms(),
            max_speed_ms: default_max_speed_ms(),
            speed_step_ms: default_speed_step_ms(),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// How long a toast notification stays on screen
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}

impl UiSettings {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_speed_ms() -> u64 {
    1000
}

fn default_min_speed_ms() -> u64 {
    100
}

fn default_max_speed_ms() -> u64 {
    2000
}

fn default_speed_step_ms() -> u64 {
    100
}

fn default_toast_duration_ms() -> u64 {
    3000
}
