use crate::error::{Result, VaultError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for tunevault, stored in the device directory as
/// `config.json`. Absent file means defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VaultConfig {
    /// Cap on append-style state-mirror documents (navigation history,
    /// playback history, search history, task log). `None` means unbounded
    /// growth.
    #[serde(default)]
    pub history_limit: Option<usize>,

    /// Pretty-print state-mirror documents so they stay hand-readable.
    #[serde(default = "default_pretty")]
    pub pretty_state_json: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            history_limit: None,
            pretty_state_json: true,
        }
    }
}

impl VaultConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(VaultError::Io)?;
        let config: VaultConfig =
            serde_json::from_str(&content).map_err(VaultError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory, creating it if needed.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(VaultError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(VaultError::Serialization)?;
        fs::write(config_path, content).map_err(VaultError::Io)?;
        Ok(())
    }
}
