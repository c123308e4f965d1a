//! Aura configuration.
//!
//! Config file: ~/.config/aura/config.toml or /etc/aura/config.toml.
//! Every field has a default so a missing file just means defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the daemon binds, e.g. "127.0.0.1:7870"
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_bind_addr() -> String {
    crate::DEFAULT_BIND_ADDR.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

/// Database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite file holding users and the QA bank
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

fn default_db_path() -> PathBuf {
    PathBuf::from("aura.db")
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Weather lookup settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// City passed to wttr.in
    #[serde(default = "default_city")]
    pub city: String,
}

fn default_city() -> String {
    "Mumbai".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            city: default_city(),
        }
    }
}

/// Session settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Hours a login session stays valid
    #[serde(default = "default_session_ttl_hours")]
    pub ttl_hours: u64,
}

fn default_session_ttl_hours() -> u64 {
    24
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_hours: default_session_ttl_hours(),
        }
    }
}

/// Main Aura configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuraConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub weather: WeatherConfig,

    #[serde(default)]
    pub session: SessionConfig,
}

impl AuraConfig {
    /// Get default user config path: ~/.config/aura/config.toml
    pub fn user_config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("XDG_CONFIG_HOME"))
            .context("Cannot determine home directory")?;

        let config_dir = if home.contains("/.config") {
            PathBuf::from(home)
        } else {
            Path::new(&home).join(".config")
        };

        Ok(config_dir.join("aura").join("config.toml"))
    }

    /// Get system config path: /etc/aura/config.toml
    pub fn system_config_path() -> PathBuf {
        PathBuf::from("/etc/aura/config.toml")
    }

    /// Load a config file from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Load configuration.
    ///
    /// Priority:
    /// 1. User config (~/.config/aura/config.toml)
    /// 2. System config (/etc/aura/config.toml)
    /// 3. Defaults
    pub fn load() -> Result<Self> {
        if let Ok(user_path) = Self::user_config_path() {
            if user_path.exists() {
                return Self::load_from(&user_path);
            }
        }

        let system_path = Self::system_config_path();
        if system_path.exists() {
            return Self::load_from(&system_path);
        }

        Ok(Self::default())
    }
}
