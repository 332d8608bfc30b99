use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use sprinkz_config::Config;

const DEFAULT_CONFIG_FILE: &str = "sprinkz_config.json";

/// Config file location, `SPRINKZ_CONFIG` or `sprinkz_config.json` in the working directory
pub fn config_path() -> PathBuf {
    std::env::var_os("SPRINKZ_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Load the saved config, creating it from defaults and the environment on first run
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        let config = Config::new();
        save_config(path, &config)?;
        tracing::info!("Created config at {}", path.display());
        return Ok(config);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = serde_json::from_str(&data)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    Ok(config)
}

pub fn save_config(path: &Path, config: &Config) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::write(path, serde_json::to_string_pretty(config)?)
        .with_context(|| format!("Failed to write config {}", path.display()))?;
    Ok(())
}
