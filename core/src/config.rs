//! Configuration for the termination protocol.
//!
//! Stored in JSON format at `~/.portk/config.json`. Every field is
//! optional; missing fields take the built-in defaults.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

use crate::adapters::lsof::DEFAULT_LSOF;
use crate::domain::GracePeriod;
use crate::error::{Error, Result};

/// Configuration data stored in JSON format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Grace period between SIGINT and SIGKILL, in milliseconds.
    #[serde(default = "default_wait_ms")]
    pub wait_ms: u64,

    /// Interval between liveness checks, in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// lsof binary used to resolve ports.
    #[serde(default = "default_lsof_path")]
    pub lsof_path: PathBuf,
}

fn default_wait_ms() -> u64 {
    3000
}

fn default_poll_interval_ms() -> u64 {
    200
}

fn default_lsof_path() -> PathBuf {
    PathBuf::from(DEFAULT_LSOF)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wait_ms: default_wait_ms(),
            poll_interval_ms: default_poll_interval_ms(),
            lsof_path: default_lsof_path(),
        }
    }
}

impl Config {
    pub fn grace_period(&self) -> GracePeriod {
        GracePeriod::from_millis(self.wait_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Reject values the terminator cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.poll_interval_ms == 0 {
            return Err(Error::Config("pollIntervalMs must be greater than 0".to_string()));
        }
        if self.lsof_path.as_os_str().is_empty() {
            return Err(Error::Config("lsofPath must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Reads the configuration file.
pub struct ConfigStore {
    /// Path to the configuration file.
    config_path: PathBuf,
}

impl ConfigStore {
    /// Create a new config store with the default path.
    ///
    /// Default path: `~/.portk/config.json`
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))?;

        Ok(Self {
            config_path: home.join(".portk").join("config.json"),
        })
    }

    /// Create a config store with a custom path.
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.config_path
    }

    /// Load and validate configuration from disk.
    ///
    /// Returns default config if the file doesn't exist.
    pub async fn load(&self) -> Result<Config> {
        if !fs::try_exists(&self.config_path).await.unwrap_or(false) {
            debug!(path = %self.config_path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&self.config_path)
            .await
            .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        debug!(path = %self.config_path.display(), ?config, "Loaded config");
        Ok(config)
    }
}
