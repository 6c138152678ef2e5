//! Application configuration
//!
//! Read from `<config dir>/engilife/config.toml`:
//! ```toml
//! data_dir = "/home/me/.local/share/engilife"
//!
//! [scheduler]
//! mastery_threshold_days = 21
//! ```
//! Every field is optional; a missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::flashcards::SchedulerConfig;
use crate::storage::{FileStore, StoreError};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config directory not found")]
    ConfigDirNotFound,

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where notes are stored (defaults to the platform data directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub scheduler: SchedulerConfig,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join("engilife").join("config.toml"))
            .ok_or(ConfigError::ConfigDirNotFound)
    }

    /// Load from the default path
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load from a specific file; a missing file gives defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;

        log::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.scheduler.mastery_threshold_days == 0 {
            return Err(ConfigError::InvalidValue(
                "scheduler.mastery_threshold_days must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve the data directory
    pub fn data_dir(&self) -> std::result::Result<PathBuf, StoreError> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => FileStore::default_data_dir(),
        }
    }
}
