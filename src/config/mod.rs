//! Configuration management module
//!
//! Handles loading, saving, and validation of the app configuration: the
//! user profile, preferred theme, and the session's opening balance. This
//! is app configuration only; ledger and progress state are never
//! persisted.

use crate::{NidhiError, Result, APP_NAME, CONFIG_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User profile shown in the home screen header
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Display name
    pub name: String,
    /// Home village label
    pub village: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Lakshmi".to_string(),
            village: "Puri".to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// User profile
    pub profile: Profile,
    /// Start in dark mode
    pub dark_mode: bool,
    /// Opening balance for the session, in whole rupees
    pub opening_balance: u64,
    /// Screen to open on, by name ("home", "learn", "money", "group",
    /// "progress"). Unknown names are ignored and the app opens on home.
    pub start_screen: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            dark_mode: false,
            opening_balance: 12500,
            start_screen: "home".to_string(),
        }
    }
}

impl AppConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.profile.name.trim().is_empty() {
            return Err(NidhiError::ConfigError(
                "profile name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from the standard config file location.
    /// Returns the default configuration if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            NidhiError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            NidhiError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                NidhiError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| NidhiError::ConfigError(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content).map_err(|e| {
            NidhiError::ConfigError(format!(
                "Failed to write config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// ($CONFIG_HOME/nidhi/nidhi.toml)
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            NidhiError::ConfigError("Unable to determine config directory".to_string())
        })?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.profile.name, "Lakshmi");
        assert_eq!(config.profile.village, "Puri");
        assert!(!config.dark_mode);
        assert_eq!(config.opening_balance, 12500);
        assert_eq!(config.start_screen, "home");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nidhi.toml");

        let mut config = AppConfig::default();
        config.profile.name = "Asha".to_string();
        config.dark_mode = true;
        config.opening_balance = 20000;
        config.start_screen = "money".to_string();
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.profile.name, "Asha");
        assert!(loaded.dark_mode);
        assert_eq!(loaded.opening_balance, 20000);
        assert_eq!(loaded.start_screen, "money");
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nidhi.toml");
        std::fs::write(&path, "dark_mode = true\n").unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert!(loaded.dark_mode);
        assert_eq!(loaded.profile.name, "Lakshmi");
        assert_eq!(loaded.opening_balance, 12500);
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut config = AppConfig::default();
        config.profile.name = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_file_path() {
        let path = AppConfig::config_file_path().unwrap();
        assert!(path.to_string_lossy().contains("nidhi"));
        assert!(path.to_string_lossy().contains("nidhi.toml"));
    }
}
