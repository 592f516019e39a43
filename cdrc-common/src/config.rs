pub mod database;
pub mod server;

use std::{fs::read_to_string, io::Error as IoError, path::Path};

use serde::Deserialize;
use serde_json::Error as SerdeJsonError;
use thiserror::Error as ThisError;
use toml::de::Error as TomlError;

/// config.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: server::ConfigServer,
    pub database: database::ConfigDatabase,
}

/// Source format of a config file, decided by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> ConfigFormat {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }
}

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] IoError),

    #[error("invalid JSON config: {0}")]
    Json(#[from] SerdeJsonError),

    #[error("invalid TOML config: {0}")]
    Toml(#[from] TomlError),
}

pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let config_str = read_to_string(path)?;
    parse_config(&config_str, ConfigFormat::from_path(path))
}

pub fn parse_config(config_str: &str, format: ConfigFormat) -> Result<Config, ConfigError> {
    let config = match format {
        ConfigFormat::Toml => toml::from_str(config_str)?,
        ConfigFormat::Json => serde_json::from_str(config_str)?,
    };
    Ok(config)
}
