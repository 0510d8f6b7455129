//! # Settings Module
//!
//! ## Purpose
//! Persistent configuration of the terminal application: where the exercise history
//! is stored and how verbose logging is.
//!
//! ## Configuration Format
//! ```json
//! {
//!   "history_file": "equilibrium_history.json",
//!   "log_level": "info",
//!   "log_file": null
//! }
//! ```
//! If the file does not exist the defaults above are used; [`Settings::load_or_create`]
//! also writes them out so the user has a file to edit. Solver constants
//! (step, tolerance, iteration cap) are deliberately not part of the configuration.
//!
//! ## Usage
//! ```rust
//! use KcEquilibrium::settings::Settings;
//!
//! let settings = Settings::load_or_default("kc_equilibrium_config.json");
//! let level = settings.level_filter().unwrap_or(log::LevelFilter::Info);
//! ```

use log::{LevelFilter, error, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// default location of the configuration file
pub const CONFIG_FILE: &str = "kc_equilibrium_config.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("config file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),
}

/// # Fields
/// * `history_file` - JSON file with the list of solved exercises
/// * `log_level` - one of off, error, warn, info, debug, trace
/// * `log_file` - if set, log records are also written to this file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub history_file: String,
    pub log_level: String,
    pub log_file: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            history_file: "equilibrium_history.json".to_string(),
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Settings {
    /// Reads settings from a JSON file; a missing file gives the defaults.
    /// Keys absent from the file keep their default values.
    pub fn load(config_file: &str) -> Result<Self, SettingsError> {
        if Path::new(config_file).exists() {
            let content = fs::read_to_string(config_file)?;
            let settings: Settings = serde_json::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// like [`Settings::load`] but falls back to the defaults on any error
    pub fn load_or_default(config_file: &str) -> Self {
        match Self::load(config_file) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("{}, using default settings", e);
                Settings::default()
            }
        }
    }

    /// Used at startup: on first run the default settings are written to `config_file`,
    /// otherwise the same as [`Settings::load_or_default`].
    pub fn load_or_create(config_file: &str) -> Self {
        if Path::new(config_file).exists() {
            return Self::load_or_default(config_file);
        }
        let settings = Settings::default();
        match settings.save(config_file) {
            Ok(()) => info!("default settings written to {}", config_file),
            Err(e) => error!("failed to write default settings to {}: {}", config_file, e),
        }
        settings
    }

    pub fn save(&self, config_file: &str) -> Result<(), SettingsError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_file, content)?;
        Ok(())
    }

    pub fn history_path(&self) -> PathBuf {
        PathBuf::from(&self.history_file)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, SettingsError> {
        self.log_level
            .trim()
            .parse::<LevelFilter>()
            .map_err(|_| SettingsError::UnknownLogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let settings = Settings::load(path.to_str().unwrap()).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.history_file, "equilibrium_history.json");
        assert_eq!(settings.level_filter().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "log_level": "debug" }}"#).unwrap();
        let settings = Settings::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(settings.level_filter().unwrap(), LevelFilter::Debug);
        assert_eq!(settings.history_file, "equilibrium_history.json");
        assert_eq!(settings.log_file, None);
    }

    #[test]
    fn test_save_and_load() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        let settings = Settings {
            history_file: "my_history.json".to_string(),
            log_level: "warn".to_string(),
            log_file: Some("kc.log".to_string()),
        };
        settings.save(path).unwrap();
        assert_eq!(Settings::load(path).unwrap(), settings);
        assert_eq!(settings.history_path(), PathBuf::from("my_history.json"));
    }

    #[test]
    fn test_first_run_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kc_equilibrium_config.json");
        let path = path.to_str().unwrap();
        assert_eq!(Settings::load_or_create(path), Settings::default());
        assert!(Path::new(path).exists());
        assert_eq!(Settings::load(path).unwrap(), Settings::default());

        // an existing file is read, not overwritten
        let custom = Settings {
            log_level: "debug".to_string(),
            ..Settings::default()
        };
        custom.save(path).unwrap();
        assert_eq!(Settings::load_or_create(path), custom);
    }

    #[test]
    fn test_bad_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let path = file.path().to_str().unwrap();
        assert!(matches!(Settings::load(path), Err(SettingsError::Json(_))));
        assert_eq!(Settings::load_or_default(path), Settings::default());

        let settings = Settings {
            log_level: "loud".to_string(),
            ..Settings::default()
        };
        assert!(matches!(
            settings.level_filter(),
            Err(SettingsError::UnknownLogLevel(_))
        ));
    }
}
