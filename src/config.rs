use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PmError;

pub const DEFAULT_STORAGE_KEY: &str = "pmScheduleTasks";

/// Contents of `.pmtrack/config.json`. Every field has a default so a
/// partial or missing file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_key: default_storage_key(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_poll_interval_ms() -> u64 {
    250
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, PmError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| PmError::config(format!("Cannot read {}: {e}", path.display())))?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| PmError::config(format!("Malformed {}: {e}", path.display())))?;
        if config.storage_key.trim().is_empty() {
            return Err(PmError::config("storage_key must not be empty"));
        }
        Ok(config)
    }

    /// Write the config unless a file is already there.
    pub fn write_default_if_missing(path: &Path) -> Result<(), PmError> {
        if path.exists() {
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(&Config::default())?)?;
        Ok(())
    }
}
