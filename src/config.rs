use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::utils::paths::get_config_path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Quote file used when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_file: Option<PathBuf>,

    #[serde(default)]
    pub hold_clipboard: bool,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config: {}", config_path.display()))?;

        Ok(config)
    }
}
