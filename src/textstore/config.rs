use crate::error::{Result, TextStoreError};
use crate::logging::LogSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "textstore.json";
const DEFAULT_DATA_PATH: &str = "data/example.txt";
const DEFAULT_LOG_FILE: &str = "log.txt";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration for the textstore binary, stored in textstore.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// Text file the store operates on
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    /// File receiving persistent log events
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// Log filter used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

fn default_log_file() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            log_file: default_log_file(),
            log_level: default_log_level(),
        }
    }
}

impl StoreConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: StoreConfig = serde_json::from_str(&content).map_err(|e| {
            TextStoreError::Config(format!("Invalid {}: {}", config_path.display(), e))
        })?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| TextStoreError::Config(e.to_string()))?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn log_settings(&self) -> LogSettings {
        LogSettings {
            log_file: self.log_file.clone(),
            level: self.log_level.clone(),
        }
    }
}
