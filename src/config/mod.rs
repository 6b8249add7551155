pub mod types;

pub use types::{CapacityConfig, Config};

use crate::error::{ConfigError, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".ecs-scale.toml";

/// Get the global config file path (~/.ecs-scale.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Get the local config file path (./.ecs-scale.toml)
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

/// Load configuration from file or use defaults
///
/// An explicit path must exist. Otherwise the local config is tried first,
/// then the global one. Whichever file is used must parse.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()).into());
        }
        return Ok(read_config(path)?);
    }

    let local = std::env::current_dir().ok().map(|dir| local_config_path(&dir));
    Ok(first_existing_config(local.into_iter().chain(global_config_path()))?)
}

/// Parse the first candidate that exists, or fall back to defaults
fn first_existing_config(
    candidates: impl IntoIterator<Item = PathBuf>,
) -> std::result::Result<Config, ConfigError> {
    match candidates.into_iter().find(|path| path.exists()) {
        Some(path) => read_config(&path),
        None => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Read and parse one config file
pub fn read_config(path: &Path) -> std::result::Result<Config, ConfigError> {
    debug!("Loading config from {}", path.display());
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::ParsingFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
