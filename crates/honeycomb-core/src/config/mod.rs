//! Configuration management for Honeycomb.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `honeycomb.toml` file
//! 3. User config `~/.config/honeycomb/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Durable store configuration.
    pub storage: StorageConfig,

    /// Graph import configuration.
    pub import: ImportConfig,

    /// HTTP server configuration.
    pub server: ServerConfig,

    /// View layout configuration.
    pub layout: LayoutConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./honeycomb.toml` (project local)
    /// 2. `~/.config/honeycomb/config.toml` (user config)
    /// 3. Falls back to defaults
    ///
    /// Environment overrides apply in every case.
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new("honeycomb.toml").exists() {
            return Self::from_file("honeycomb.toml");
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("honeycomb").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var("HONEYCOMB_DATA_DIR") {
            self.storage.data_dir = dir;
        }
        if let Ok(bytes) = std::env::var("HONEYCOMB_MAX_IMPORT_BYTES") {
            if let Ok(n) = bytes.parse() {
                self.import.max_bytes = n;
            }
        }
        if let Ok(port) = std::env::var("HONEYCOMB_PORT") {
            if let Ok(n) = port.parse() {
                self.server.port = n;
            }
        }
        if let Ok(url) = std::env::var("HONEYCOMB_BASE_URL") {
            self.server.base_url = url;
        }
    }

    /// Reject settings no component can work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.import.max_bytes == 0 {
            return Err(ConfigError::Invalid("import.max_bytes must be greater than 0".into()));
        }
        if self.storage.root_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage.root_key must not be empty".into()));
        }
        if !self.layout.radius.is_finite() || self.layout.radius < 0.0 {
            return Err(ConfigError::Invalid("layout.radius must be a non-negative number".into()));
        }
        Ok(())
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Durable store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Base directory for stored documents (default: ".honeycomb").
    pub data_dir: String,

    /// Store key of the hive root.
    pub root_key: String,

    /// Extension of stored documents.
    pub file_extension: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            root_key: DEFAULT_ROOT_KEY.to_string(),
            file_extension: DEFAULT_FILE_EXTENSION.to_string(),
        }
    }
}

impl StorageConfig {
    /// Full path of the data directory.
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }
}

/// Graph import configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Maximum accepted payload size in bytes.
    pub max_bytes: usize,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_IMPORT_BYTES,
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to listen on.
    pub host: String,

    /// Port to listen on.
    pub port: u16,

    /// Public base URL used to build resource links.
    pub base_url: String,

    /// Whether `serve` opens a browser.
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            base_url: DEFAULT_BASE_URL.to_string(),
            open_browser: false,
        }
    }
}

/// Sizes and radius of the circular view layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub radius: f64,
    pub root_width: u32,
    pub root_height: u32,
    pub child_width: u32,
    pub child_height: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_LAYOUT_RADIUS,
            root_width: DEFAULT_ROOT_WIDTH,
            root_height: DEFAULT_ROOT_HEIGHT,
            child_width: DEFAULT_CHILD_WIDTH,
            child_height: DEFAULT_CHILD_HEIGHT,
        }
    }
}
