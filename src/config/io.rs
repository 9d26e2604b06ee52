//! Configuration file I/O operations

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use fs2::FileExt;

use super::Config;

/// Default configuration content written by `bloom init`
pub const DEFAULT_CONFIG: &str = r#"# Bloom Configuration
# ===================
#
# Everything here is optional; missing keys fall back to defaults.

[settings]
# Where the wellness database lives (default: ~/.bloom)
# data_dir = "/home/you/.bloom"

# Default range for `bloom report` in days: 7, 30, or 90 (0 = all time)
report_range_days = 30

# Show emoji in CLI output
emoji = true

# ============================================================================
# COACH - the generative-AI wellness coach
# ============================================================================
#
# The coach needs a Gemini API key. You can set it here or export
# GEMINI_API_KEY in your shell. Without a key, coach commands print their
# offline fallbacks where one exists.

[coach]
# api_key = ""
model = "gemini-2.0-flash"

# Sampling temperature for the daily affirmation (higher = more variety)
affirmation_temperature = 0.9
"#;

impl Config {
    /// Save configuration to a file with atomic write and file locking.
    ///
    /// An exclusive lock prevents concurrent writers, and the temp file +
    /// rename keeps a crash from corrupting the config.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        // Lock file is separate from the config so the rename stays atomic
        let lock_path = path.with_extension("toml.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;
        lock_file
            .lock_exclusive()
            .with_context(|| format!("Failed to lock {}", lock_path.display()))?;

        let tmp_path = path.with_extension("toml.tmp");
        {
            let mut tmp = std::fs::File::create(&tmp_path)
                .with_context(|| format!("Failed to create {}", tmp_path.display()))?;
            tmp.write_all(content.as_bytes())
                .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
            tmp.sync_all().ok();
        }
        std::fs::rename(&tmp_path, path)
            .with_context(|| format!("Failed to move config into place: {}", path.display()))?;

        fs2::FileExt::unlock(&lock_file).ok();
        Ok(())
    }

    /// Write the documented default config to a path
    pub fn write_default(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        std::fs::write(path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.settings.emoji = false;
        config.coach.model = "gemini-2.0-pro".to_string();
        config.save_to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert!(!loaded.settings.emoji);
        assert_eq!(loaded.coach.model, "gemini-2.0-pro");
    }

    #[test]
    fn test_write_default_parses() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        Config::write_default(&path).unwrap();
        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.settings.report_range_days, 30);
    }
}
