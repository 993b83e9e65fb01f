//! TOML-based application configuration.
//!
//! The only tunables this core exposes: the celebration duration table
//! (tier → milliseconds) and the default debounce delay.
//!
//! Configuration is stored at `~/.config/habitloop/config.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::celebration::CelebrationDurations;
use crate::error::ConfigError;

/// Celebration display durations per outcome tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CelebrationConfig {
    #[serde(default = "default_gold_ms")]
    pub gold_ms: u64,
    #[serde(default = "default_silver_ms")]
    pub silver_ms: u64,
    #[serde(default = "default_bronze_ms")]
    pub bronze_ms: u64,
}

/// Debounce configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebounceConfig {
    /// Quiet-window length in milliseconds when the caller supplies none.
    #[serde(default = "default_debounce_delay_ms")]
    pub default_delay_ms: u64,
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub celebration: CelebrationConfig,
    #[serde(default)]
    pub debounce: DebounceConfig,
}

fn default_gold_ms() -> u64 {
    10_000
}

fn default_silver_ms() -> u64 {
    7_000
}

fn default_bronze_ms() -> u64 {
    5_000
}

fn default_debounce_delay_ms() -> u64 {
    300
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            gold_ms: default_gold_ms(),
            silver_ms: default_silver_ms(),
            bronze_ms: default_bronze_ms(),
        }
    }
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            default_delay_ms: default_debounce_delay_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            celebration: CelebrationConfig::default(),
            debounce: DebounceConfig::default(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/habitloop"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk, writing the default config on first run.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Save to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// The celebration duration table in the timer's shape.
    pub fn celebration_durations(&self) -> CelebrationDurations {
        CelebrationDurations {
            gold_ms: self.celebration.gold_ms,
            silver_ms: self.celebration.silver_ms,
            bronze_ms: self.celebration.bronze_ms,
        }
    }
}
