//! Crate-wide error types.

use crate::platform::PlatformError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the optional configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file given with `--config` does not exist
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Config file could not be read
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for our schema
    #[error("Failed to parse config file {}: {message}", .path.display())]
    ParsingFailed { path: PathBuf, message: String },
}

/// Top-level error for resolving and scaling services
#[derive(Debug, Error)]
pub enum ScaleError {
    /// An `--include` token names no discovered service
    #[error("include: {token} not found in {}", render_universe(.universe))]
    IncludeNotFound { token: String, universe: Vec<String> },

    /// An `--exclude` token names no discovered service
    #[error("exclude: {token} not found in {}", render_universe(.universe))]
    ExcludeNotFound { token: String, universe: Vec<String> },

    /// The platform returned an identifier without a `/` separator
    #[error("Malformed identifier from platform: {0}")]
    MalformedIdentifier(String),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing command output failed (e.g. closed stdout)
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl ScaleError {
    /// True for include/exclude filter validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ScaleError::IncludeNotFound { .. } | ScaleError::ExcludeNotFound { .. }
        )
    }
}

fn render_universe(universe: &[String]) -> String {
    format!("[{}]", universe.join(", "))
}

pub type Result<T> = std::result::Result<T, ScaleError>;
