//! Configuration file handling
//!
//! The config is a single JSON object. Every field is optional:
//!
//! ```json
//! {
//!   "data_file": "library_data.txt",
//!   "seed_defaults": true,
//!   "stale_title_index": true,
//!   "log": { "level": "info", "format": "text" }
//! }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::Unreadable { .. } => "SHELF_CONFIG_UNREADABLE",
            ConfigError::Invalid(_) => "SHELF_CONFIG_INVALID",
        }
    }
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging section of the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// tracing level for the shelfdb target
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Catalog engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Snapshot file path
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Seed the default records when no snapshot exists
    #[serde(default = "default_true")]
    pub seed_defaults: bool,

    /// Keep the title tree insert-only, so deleted titles stay visible to
    /// tree search and sorted listing. When false the tree is rebuilt from
    /// the primary index after each delete.
    #[serde(default = "default_true")]
    pub stale_title_index: bool,

    #[serde(default)]
    pub log: LogConfig,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("library_data.txt")
}
fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            seed_defaults: true,
            stale_title_index: true,
            log: LogConfig::default(),
        }
    }
}

impl CatalogConfig {
    /// Config pointing at a specific snapshot file, everything else default
    pub fn with_data_file(path: impl Into<PathBuf>) -> Self {
        Self {
            data_file: path.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Load configuration, falling back to defaults if the file is absent
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        match fs::metadata(path) {
            Ok(_) => Self::load(path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Unreadable {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Parse and validate a JSON config document
    pub fn from_json(content: &str) -> ConfigResult<Self> {
        let config: CatalogConfig = serde_json::from_str(content)
            .map_err(|e| ConfigError::Invalid(format!("invalid config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate field values
    pub fn validate(&self) -> ConfigResult<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("data_file must not be empty".into()));
        }

        if !VALID_LEVELS.contains(&self.log.level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "invalid log.level: '{}'. Must be one of {}.",
                self.log.level,
                VALID_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}
