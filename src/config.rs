//! Settings parser for `config.toml`

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_FILENAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigError::NotFound(path) => {
                format!("No config file at {}", path.display())
            }
            ConfigError::Io(e) => format!("Could not read the config file: {}", e),
            ConfigError::Parse(e) => format!("The config file is not valid TOML: {}", e),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Below this many columns the navigation collapses into a menu.
    pub compact_width: u16,
    pub tick_rate_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            compact_width: 80,
            tick_rate_ms: 250,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// JSON catalog replacing the built-in skills.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `tracing_subscriber::EnvFilter` directive; `GRAVITY_LOG` wins over it.
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Where the running configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// No file at the default location (or no config dir on this platform).
    Defaults,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiSettings,
    pub catalog: CatalogSettings,
    pub log: LogSettings,
}

impl Config {
    /// Load from an explicit path, or from the default location if there is one.
    ///
    /// A missing explicit file is an error; a missing default file yields the
    /// defaults.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, ConfigSource), ConfigError> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Ok((Self::from_file(path)?, ConfigSource::File(path.to_path_buf())))
            }
            None => match default_path() {
                Some(path) if path.exists() => {
                    let config = Self::from_file(&path)?;
                    Ok((config, ConfigSource::File(path)))
                }
                _ => Ok((Self::default(), ConfigSource::Defaults)),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}

/// `<config dir>/gravity-defied/config.toml`
pub fn default_path() -> Option<PathBuf> {
    crate::project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}
