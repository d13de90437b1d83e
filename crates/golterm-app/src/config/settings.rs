//! Settings loader for config.toml

use std::path::{Path, PathBuf};

use golterm_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "golterm";

const DEFAULT_CONFIG: &str = r#"# golterm configuration

[api]
# Game server address; endpoints are resolved under api/game/
base_url = "http://localhost:8080"
# Request timeout in milliseconds (0 = no timeout)
timeout_ms = 0

[auto_play]
# Auto-play period in milliseconds
speed_ms = 1000
min_speed_ms = 100
max_speed_ms = 2000
# Step used by the + and - keys
speed_step_ms = 100

[ui]
# How long notifications stay on screen, in milliseconds
toast_duration_ms = 3000
"#;

/// `$XDG_CONFIG_HOME/golterm/config.toml` (platform equivalent elsewhere)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`
///
/// A missing file yields defaults. An unreadable or invalid file is logged
/// and also yields defaults: a broken config never prevents startup.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config file unless one already exists
///
/// Returns `true` when a file was created.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;
    info!("Created default config at {:?}", config_path);
    Ok(true)
}

impl Settings {
    /// Apply command-line overrides on top of file values
    pub fn with_overrides(mut self, base_url: Option<String>, speed_ms: Option<u64>) -> Self {
        if let Some(base_url) = base_url {
            self.api.base_url = base_url;
        }
        if let Some(speed_ms) = speed_ms {
            self.auto_play.speed_ms = speed_ms;
        }
        self
    }

    /// Reject settings that cannot work at all
    ///
    /// Out-of-range speeds are not errors: they are clamped by the speed
    /// control.
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(Error::config_invalid("api.base_url must not be empty"));
        }
        if self.auto_play.min_speed_ms == 0 {
            return Err(Error::config_invalid(
                "auto_play.min_speed_ms must be greater than 0",
            ));
        }
        if self.auto_play.min_speed_ms > self.auto_play.max_speed_ms {
            return Err(Error::config_invalid(format!(
                "auto_play.min_speed_ms ({}) is greater than auto_play.max_speed_ms ({})",
                self.auto_play.min_speed_ms, self.auto_play.max_speed_ms
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_missing_file() {
        let temp = tempdir().unwrap();
        let settings = load_settings(&temp.path().join("config.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        let config = r#"
[api]
base_url = "http://10.0.0.2:9090"

[auto_play]
speed_ms = 400
speed_step_ms = 50

[ui]
toast_duration_ms = 1200
"#;
        std::fs::write(&path, config).unwrap();

        let settings = load_settings(&path);

        assert_eq!(settings.api.base_url, "http://10.0.0.2:9090");
        assert_eq!(settings.auto_play.speed_ms, 400);
        assert_eq!(settings.auto_play.speed_step_ms, 50);
        assert_eq!(settings.ui.toast_duration_ms, 1200);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "not valid toml {{{{").unwrap();

        // Should return defaults
        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn test_init_config_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("golterm").join("config.toml");

        assert!(init_config_file(&path).unwrap());

        // Content should be valid TOML matching the defaults
        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Settings = toml::from_str(&content).expect("Default config should be valid TOML");
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn test_init_config_file_idempotent() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[auto_play]\nspeed_ms = 300\n").unwrap();

        assert!(!init_config_file(&path).unwrap());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("speed_ms = 300"));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let settings = Settings::default()
            .with_overrides(Some("http://example.com".to_string()), Some(250));

        assert_eq!(settings.api.base_url, "http://example.com");
        assert_eq!(settings.auto_play.speed_ms, 250);
    }

    #[test]
    fn test_validate() {
        assert!(Settings::default().validate().is_ok());

        let mut settings = Settings::default();
        settings.auto_play.min_speed_ms = 5000;
        assert!(matches!(
            settings.validate(),
            Err(Error::ConfigInvalid { .. })
        ));

        let settings = Settings::default().with_overrides(Some("  ".to_string()), None);
        assert!(settings.validate().is_err());
    }
}
