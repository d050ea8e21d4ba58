use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::fractals::mandelbrot::mandelbrot_config::{ConfigError, MandelbrotConfig};

#[derive(Debug, Error)]
pub enum ReadConfigError {
    #[error("could not read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid configuration in {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },
}

/// Parses a TOML configuration file without validating it; missing keys keep
/// their defaults. Callers that override values validate afterwards.
pub fn parse_config(filepath: impl AsRef<Path>) -> Result<MandelbrotConfig, ReadConfigError> {
    let path = filepath.as_ref().to_path_buf();

    let text = std::fs::read_to_string(&path).map_err(|source| ReadConfigError::Read {
        path: path.clone(),
        source,
    })?;

    toml::from_str(&text).map_err(|source| ReadConfigError::Parse { path, source })
}

/// Loads and validates a TOML configuration file.
pub fn read_config(filepath: impl AsRef<Path>) -> Result<MandelbrotConfig, ReadConfigError> {
    let path = filepath.as_ref();
    let config = parse_config(path)?;

    config
        .validate()
        .map_err(|source| ReadConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(config)
}
