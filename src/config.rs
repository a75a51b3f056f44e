//! Configuration module for Flicker

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Library configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Cache capacity in mebibytes
    #[serde(default = "default_cache_capacity_mib")]
    pub cache_capacity_mib: u64,

    /// Whether animated images may be cached at all
    #[serde(default = "default_allow_animated")]
    pub allow_animated: bool,

    /// Maximum dimension still images are downscaled to (0 = no resizing)
    #[serde(default = "default_max_dimension")]
    pub max_dimension: u32,
}

fn default_cache_capacity_mib() -> u64 {
    64
}

fn default_allow_animated() -> bool {
    true
}

fn default_max_dimension() -> u32 {
    800
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity_mib: default_cache_capacity_mib(),
            allow_animated: default_allow_animated(),
            max_dimension: default_max_dimension(),
        }
    }
}

impl Config {
    /// Cache capacity in bytes
    #[must_use]
    pub const fn cache_capacity_bytes(&self) -> u64 {
        self.cache_capacity_mib * 1024 * 1024
    }

    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("flicker");
        Ok(config_dir.join("config.toml"))
    }

    /// Load config from the default path or create default
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        Self::load_from(&path)
    }

    /// Load config from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path).context("Failed to read config file")?;
            toml::from_str(&content).context("Failed to parse config file")
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path()?;
        self.save_to(&path)
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }
}
