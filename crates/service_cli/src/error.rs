//! Error types for the descent runner.

use thiserror::Error;

/// Runner error type
#[derive(Debug, Error)]
pub enum CliError {
    /// One of the prompted values is not a number
    #[error("wrong input: {field} = {value:?} is not a number")]
    InvalidInput {
        /// Prompted field
        field: &'static str,
        /// Text as entered
        value: String,
    },

    /// Run configuration rejected
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Solver configuration rejected
    #[error("Solver configuration error: {0}")]
    Solver(#[from] optimiser_core::types::ConfigError),

    /// A solver task ended without delivering its result
    #[error("Solver task failed: {0}")]
    TaskFailed(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for runner operations
pub type Result<T> = std::result::Result<T, CliError>;
