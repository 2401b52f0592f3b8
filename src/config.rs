//! Layered configuration: defaults, then a TOML file, then `RECMAN_*`
//! environment variables.

use std::path::PathBuf;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::model::Country;

/// Directory name used under the platform config and data directories.
const APP_DIR_NAME: &str = "recman";

const CONFIG_FILE_NAME: &str = "config.toml";

const LOG_FILE_NAME: &str = "recman.log";

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A source could not be read or did not match the expected shape.
    #[error("failed to load configuration: {0}")]
    Load(Box<figment::Error>),

    /// The configuration loaded but holds an unusable value.
    #[error("invalid configuration: {message}")]
    Validation { message: String },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Load(Box::new(err))
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub ui: UiConfig,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level written: `error`, `warn`, `info`, `debug` or `trace`.
    pub level: String,
    /// Log file; defaults to `<data_dir>/recman/recman.log`.
    pub file: Option<PathBuf>,
}

/// Terminal UI behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Ask for `y`/`n` before deleting a record.
    pub confirm_delete: bool,
    /// Country pre-selected in every fresh draft.
    pub default_country: Option<Country>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            confirm_delete: true,
            default_country: None,
        }
    }
}

impl Config {
    /// Loads configuration from `config_path`, or the default location when
    /// `None`. A missing file is not an error.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("RECMAN_").split("__"))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Returns `<config_dir>/recman/config.toml`.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Returns `<data_dir>/recman`.
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(APP_DIR_NAME)
    }

    /// Checks values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.log_level().map(|_| ())
    }

    /// Parses the configured log level.
    pub fn log_level(&self) -> Result<Level, ConfigError> {
        self.logging
            .level
            .parse::<Level>()
            .map_err(|_| ConfigError::Validation {
                message: format!("unknown log level: {}", self.logging.level),
            })
    }

    /// Returns the log file path, resolving the default if unset.
    pub fn log_file(&self) -> PathBuf {
        self.logging
            .file
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(LOG_FILE_NAME))
    }
}
