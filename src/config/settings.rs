//! General and coach settings

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Override for the data directory (default: ~/.bloom)
    pub data_dir: Option<PathBuf>,

    /// Default report range in days (7, 30, or 90; 0 = all time)
    pub report_range_days: u32,

    /// Show emoji in CLI output
    pub emoji: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: None,
            report_range_days: 30,
            emoji: true,
        }
    }
}

/// Settings for the AI coach
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CoachSettings {
    /// API key; falls back to the GEMINI_API_KEY environment variable
    pub api_key: Option<String>,

    /// Model name used for all coach calls
    pub model: String,

    /// Endpoint base override (mainly for tests and proxies)
    pub endpoint: Option<String>,

    /// Sampling temperature for the daily affirmation (higher = more variety)
    pub affirmation_temperature: f64,
}

impl Default for CoachSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.0-flash".to_string(),
            endpoint: None,
            affirmation_temperature: 0.9,
        }
    }
}

impl CoachSettings {
    /// Resolve the API key: config first, then environment
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.report_range_days, 30);
        assert!(settings.emoji);

        let coach = CoachSettings::default();
        assert_eq!(coach.model, "gemini-2.0-flash");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: Settings = toml::from_str("emoji = false").unwrap();
        assert!(!settings.emoji);
        assert_eq!(settings.report_range_days, 30);
    }
}
