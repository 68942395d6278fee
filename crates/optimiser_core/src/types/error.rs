//! Error types for solver configuration.

use thiserror::Error;

/// Reasons a [`DescentConfig`](crate::solvers::DescentConfig) is rejected.
///
/// # Examples
/// ```
/// use optimiser_core::types::ConfigError;
///
/// let err = ConfigError::InvalidTolerance(-1.0);
/// assert_eq!(format!("{}", err), "Invalid tolerance: -1. Must be finite and non-negative");
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Tolerance is negative or not finite
    #[error("Invalid tolerance: {0}. Must be finite and non-negative")]
    InvalidTolerance(f64),

    /// Initial step is not strictly positive and finite
    #[error("Invalid initial step: {0}. Must be finite and positive")]
    InvalidInitialStep(f64),

    /// Iteration bound of zero
    #[error("Invalid max iterations: must be greater than 0")]
    InvalidMaxIterations,
}
