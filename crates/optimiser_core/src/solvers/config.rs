//! Solver configuration types.

use crate::types::ConfigError;

/// Default iteration bound shared by all solvers.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Default base step length for gradient descent.
pub const DEFAULT_INITIAL_STEP: f64 = 1.0;

/// Configuration shared read-only by all three descent solvers.
///
/// # Example
///
/// ```
/// use optimiser_core::solvers::DescentConfig;
///
/// let config = DescentConfig::new(1e-6, 1000, 1.0).unwrap();
/// assert_eq!(config.max_iterations(), 1000);
///
/// assert!(DescentConfig::new(-1.0, 1000, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescentConfig {
    tolerance: f64,
    max_iterations: usize,
    initial_step: f64,
}

impl DescentConfig {
    /// Create a new configuration with validated values.
    ///
    /// # Arguments
    ///
    /// * `tolerance` - Stationarity tolerance on both first partials (finite, `>= 0`)
    /// * `max_iterations` - Bound on outer iterations and on backtracking tries (`> 0`)
    /// * `initial_step` - Gradient descent step at the start of every outer iteration (finite, `> 0`)
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first rejected value.
    pub fn new(
        tolerance: f64,
        max_iterations: usize,
        initial_step: f64,
    ) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if max_iterations == 0 {
            return Err(ConfigError::InvalidMaxIterations);
        }
        if !initial_step.is_finite() || initial_step <= 0.0 {
            return Err(ConfigError::InvalidInitialStep(initial_step));
        }

        Ok(Self {
            tolerance,
            max_iterations,
            initial_step,
        })
    }

    /// Stationarity tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Iteration bound.
    #[must_use]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Base step length for gradient descent.
    #[must_use]
    pub fn initial_step(&self) -> f64 {
        self.initial_step
    }
}
