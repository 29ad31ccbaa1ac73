//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The settings file could not be read.
    #[error("Failed to read settings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not a valid settings document.
    #[error("Failed to parse settings file {path}: {reason}")]
    Parse { path: String, reason: String },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigurationError>;
