//! Error types for delete results and their surrounding configuration.

use thiserror::Error;

/// Contract violations raised while constructing a value.
///
/// Construction either fully succeeds or yields one of these; a value that
/// exists is always valid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Crate-level errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Contract error: {0}")]
    Contract(#[from] ContractError),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
