use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::cli::Args;
use crate::weather::{Coordinates, CoordinatesError};
use crate::weatherapi::BASE_URL;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("no API key: pass --api-key, set WEATHERAPI_KEY or add api_key to the config file")]
    MissingApiKey,

    #[error("timeout must be at least one second")]
    ZeroTimeout,

    #[error("invalid home location: {0}")]
    InvalidHome(#[from] CoordinatesError),
}

/// Settings the weather client and UI run with.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
    pub home: Option<Coordinates>,
}

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub home: Option<Coordinates>,
}

pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wxnow").join("config.toml"))
}

impl FileConfig {
    /// Read an explicit path, or the default path if it exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match default_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }
}

impl Config {
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        let file = FileConfig::load(args.config.as_deref())?;
        Self::merge(file, args)
    }

    /// Command line and environment win over the file, the file wins over
    /// defaults.
    pub fn merge(file: FileConfig, args: &Args) -> Result<Self, ConfigError> {
        let api_key = args
            .api_key
            .clone()
            .or(file.api_key)
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let mut base_url = args
            .base_url
            .clone()
            .or(file.base_url)
            .unwrap_or_else(|| BASE_URL.to_string());
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let timeout_secs = args
            .timeout
            .or(file.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        let home = match file.home {
            Some(home) => Some(Coordinates::new(home.lat, home.lon)?),
            None => None,
        };

        Ok(Self {
            api_key,
            base_url,
            timeout_secs,
            home,
        })
    }
}
