//! Infrastructure error types

use domain::DomainError;
use thiserror::Error;

/// Errors raised while wiring up the voice guidance stack
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// Configuration sources could not be read or deserialized
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Configuration values are out of range
    #[error("Invalid configuration: {0}")]
    Validation(String),

    /// A file could not be read
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File that failed
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Guidance overrides are not valid TOML
    #[error("Failed to parse guidance overrides: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Guidance overrides are well formed but rejected
    #[error("Invalid guidance content: {0}")]
    Content(#[from] DomainError),

    /// Logging could not be initialized
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
