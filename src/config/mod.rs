//! Configuration loading and management

mod io;
mod settings;

pub use io::DEFAULT_CONFIG;
pub use settings::{CoachSettings, Settings};

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub settings: Settings,

    /// AI coach settings
    pub coach: CoachSettings,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load the global configuration, or defaults when no file exists
    pub fn load() -> Result<Self> {
        let path = Self::global_config_path();
        if path.exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load from an explicit path when given, otherwise the global config
    pub fn load_or(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::load(),
        }
    }

    /// The global config directory path (~/.bloom/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".bloom")
    }

    /// The global config file path (~/.bloom/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Resolved data directory (settings override or the config dir)
    pub fn data_dir(&self) -> PathBuf {
        self.settings
            .data_dir
            .clone()
            .unwrap_or_else(Self::global_config_dir)
    }

    /// Path to the wellness database
    pub fn db_path(&self) -> PathBuf {
        self.data_dir().join("wellness.db")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.coach.model, "gemini-2.0-flash");
        assert_eq!(config.settings.report_range_days, 30);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.settings.emoji);
        assert!(config.coach.api_key.is_none());
    }

    #[test]
    fn test_db_path_uses_data_dir_override() {
        let mut config = Config::default();
        config.settings.data_dir = Some(PathBuf::from("/tmp/bloom-test"));
        assert_eq!(config.db_path(), PathBuf::from("/tmp/bloom-test/wellness.db"));
    }
}
