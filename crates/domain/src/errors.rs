//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Module key without a matching guidance module
    #[error("Unknown guidance module: {0}")]
    UnknownModule(String),

    /// Guidance content is incomplete or not allowed
    #[error("Invalid guidance content: {0}")]
    InvalidGuidance(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
