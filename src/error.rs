#![forbid(unsafe_code)]

//! Error types surfaced by the router and its configuration layer

use std::path::PathBuf;
use thiserror::Error;

/// No registered route accepted the sub-command, or the matching route has no handler.
///
/// Always delivered to the responder as an `anyhow::Error`; use
/// `err.downcast_ref::<CommandNotFound>()` to tell it apart from handler failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Error)]
#[error("No Command Found!")]
pub struct CommandNotFound;

/// Errors that can occur when loading router configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML or has unknown values
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// An environment override carried a value we do not understand
    #[error("Invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },
}
