//! Read-only dashboard settings stored as TOML in the app directory.
//!
//! The file is optional. Every key has a serde default so partial files work.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;

/// Default filename used to store the dashboard settings.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors that may occur while loading dashboard settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to create the config directory.
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        /// Directory path that failed to create.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to read the config file.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// The config file is not valid TOML for [`DashboardConfig`].
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        /// TOML file path.
        path: PathBuf,
        /// TOML parse error.
        source: toml::de::Error,
    },
    /// No usable config directory found.
    #[error("No suitable config directory found")]
    NoConfigDir,
}

/// Settings read once at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub window: WindowSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Where the prediction CSV comes from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetSettings {
    /// Overrides the bundled `data/processed` location.
    ///
    /// Relative paths are taken relative to the config file's folder.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Native window preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    #[serde(default = "default_true")]
    pub maximized: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            maximized: default_true(),
        }
    }
}

/// Tracing filter and log-file retention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Number of per-launch log files to keep.
    #[serde(default = "default_retained_files")]
    pub retained_files: usize,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            retained_files: default_retained_files(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_retained_files() -> usize {
    10
}

/// Resolve the config file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir().map_err(map_app_dir_error)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load settings from the app directory, returning defaults if the file is missing.
pub fn load_or_default() -> Result<DashboardConfig, ConfigError> {
    let path = config_path()?;
    load_from(&path)
}

/// Load settings from a specific file, returning defaults if it does not exist.
pub fn load_from(path: &Path) -> Result<DashboardConfig, ConfigError> {
    if !path.exists() {
        return Ok(DashboardConfig::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut config: DashboardConfig =
        toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })?;
    if let (Some(dataset_path), Some(dir)) = (config.dataset.path.as_mut(), path.parent())
        && dataset_path.is_relative()
    {
        *dataset_path = dir.join(&*dataset_path);
    }
    Ok(config)
}

fn map_app_dir_error(error: app_dirs::AppDirError) -> ConfigError {
    match error {
        app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => ConfigError::CreateDir { path, source },
    }
}
