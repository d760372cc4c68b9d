use crate::error::{ClosetError, Result};
use crate::store::fs::DEFAULT_SNAPSHOT_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for closet, stored in `<data-dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClosetConfig {
    /// Name of the snapshot file inside the data directory
    #[serde(default = "default_snapshot_file")]
    pub snapshot_file: String,

    /// Write the wardrobe back when the session is exited from the main menu
    #[serde(default = "default_save_on_exit")]
    pub save_on_exit: bool,
}

fn default_snapshot_file() -> String {
    DEFAULT_SNAPSHOT_FILE.to_string()
}

fn default_save_on_exit() -> bool {
    true
}

impl Default for ClosetConfig {
    fn default() -> Self {
        Self {
            snapshot_file: default_snapshot_file(),
            save_on_exit: default_save_on_exit(),
        }
    }
}

/// Keys accepted by `closet config`.
pub const CONFIG_KEYS: &[&str] = &["snapshot-file", "save-on-exit"];

impl ClosetConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ClosetError::Io)?;
        let config: ClosetConfig =
            serde_json::from_str(&content).map_err(ClosetError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ClosetError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ClosetError::Serialization)?;
        fs::write(config_path, content).map_err(ClosetError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "snapshot-file" => Ok(self.snapshot_file.clone()),
            "save-on-exit" => Ok(self.save_on_exit.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "snapshot-file" => {
                let name = value.trim();
                if name.is_empty() || name.contains(['/', '\\']) {
                    return Err(ClosetError::Config(format!(
                        "snapshot-file must be a plain file name, got '{}'",
                        value
                    )));
                }
                self.snapshot_file = name.to_string();
            }
            "save-on-exit" => {
                self.save_on_exit = value.trim().parse().map_err(|_| {
                    ClosetError::Config(format!("save-on-exit must be true or false, got '{}'", value))
                })?;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> ClosetError {
    ClosetError::Config(format!(
        "Unknown config key: {} (known: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
