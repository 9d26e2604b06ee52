//! Init command implementation

use anyhow::{bail, Result};
use tracing::info;

use bloom::config::Config;

/// Write the default config file to ~/.bloom/config.toml
pub async fn init_command(force: bool) -> Result<()> {
    let path = Config::global_config_path();

    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::write_default(&path)?;
    info!("Wrote config to {}", path.display());
    println!("Created {}", path.display());
    println!("Set coach.api_key (or export GEMINI_API_KEY) to enable the AI coach.");
    Ok(())
}
