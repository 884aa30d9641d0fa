//! Configuration loading.
//!
//! Settings come from an optional JSON file. Fields the file leaves out keep
//! their defaults, and the merged result is validated before use. The loaded
//! configuration is an ordinary value passed to whoever needs it.

pub mod schema;

pub use schema::{ClientConfig, ACCOUNT_PLACEHOLDER};

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Loads configuration from `path`, or returns the defaults when `path` is `None`.
///
/// # Example
///
/// ```no_run
/// use vargroup::config::load_config;
/// use std::path::Path;
///
/// let config = load_config(Some(Path::new("vargroup.json"))).unwrap();
/// println!("Timeout: {}s", config.timeout_secs);
/// ```
pub fn load_config(path: Option<&Path>) -> Result<ClientConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let config = parse_config(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
            log::debug!("Loaded configuration from {}", path.display());
            config
        }
        None => ClientConfig::default(),
    };

    config.validate().map_err(ConfigError::Invalid)?;
    Ok(config)
}

/// Parses a JSON settings document, filling in defaults for missing fields.
pub fn parse_config(json: &str) -> Result<ClientConfig, serde_json::Error> {
    serde_json::from_str(json)
}
