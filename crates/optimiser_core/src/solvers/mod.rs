//! Descent solvers for the fixed objective.
//!
//! ## Available Solvers
//!
//! - [`GradientDescentSolver`]: steepest descent with step-halving backtracking
//! - [`CoordinateDescentSolver`]: one-variable Newton step per coordinate, skipped
//!   for a coordinate whose partial is already within tolerance
//! - [`NewtonSolver`]: both Newton updates applied every iteration
//!
//! All three implement [`DescentSolver`], share one [`DescentConfig`], consult
//! [`is_stationary`](crate::convergence::is_stationary) before every iteration and
//! return a [`Trace`] of at most `max_iterations + 1` records. Running out of
//! iterations is not an error: the trace accumulated so far is returned.
//!
//! ## Examples
//!
//! ```
//! use optimiser_core::solvers::{DescentConfig, Method};
//! use optimiser_core::types::Point;
//!
//! let config = DescentConfig::new(0.01, 1000, 1.0).unwrap();
//!
//! for method in Method::ALL {
//!     let trace = method.minimise(config, Point::new(6.0, 0.0));
//!     assert_eq!(trace.len(), 1);
//! }
//! ```

mod config;
mod coordinate_descent;
mod gradient_descent;
mod newton;

pub use config::{DescentConfig, DEFAULT_INITIAL_STEP, DEFAULT_MAX_ITERATIONS};
pub use coordinate_descent::CoordinateDescentSolver;
pub use gradient_descent::GradientDescentSolver;
pub use newton::NewtonSolver;

use std::fmt;

use tracing::{debug, warn};

use crate::convergence::is_stationary;
use crate::types::{Point, Trace};

/// Common interface of the descent solvers.
pub trait DescentSolver {
    /// Which method this solver implements.
    fn method(&self) -> Method;

    /// The configuration the solver runs with.
    fn config(&self) -> &DescentConfig;

    /// Iterate from `start` until stationary or the iteration bound is reached.
    ///
    /// The returned trace starts with `start` and its objective value.
    fn minimise(&self, start: Point) -> Trace;
}

/// The three descent methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// [`GradientDescentSolver`]
    GradientDescent,
    /// [`CoordinateDescentSolver`]
    CoordinateDescent,
    /// [`NewtonSolver`]
    Newton,
}

impl Method {
    /// All methods in launch order.
    pub const ALL: [Method; 3] = [
        Method::GradientDescent,
        Method::CoordinateDescent,
        Method::Newton,
    ];

    /// Display name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Method::GradientDescent => "Gradient method",
            Method::CoordinateDescent => "Coordinate Descent method",
            Method::Newton => "Newton method",
        }
    }

    /// Prefix of the output file stem; the starting-point label follows it.
    pub fn file_prefix(&self) -> &'static str {
        match self {
            Method::GradientDescent => "Gradient_method",
            Method::CoordinateDescent => "Coordinate_Descent",
            Method::Newton => "Newton",
        }
    }

    /// Run this method's solver from `start`.
    pub fn minimise(&self, config: DescentConfig, start: Point) -> Trace {
        match self {
            Method::GradientDescent => GradientDescentSolver::new(config).minimise(start),
            Method::CoordinateDescent => CoordinateDescentSolver::new(config).minimise(start),
            Method::Newton => NewtonSolver::new(config).minimise(start),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Log how a finished run ended.
fn log_outcome<S: DescentSolver + ?Sized>(solver: &S, trace: &Trace) {
    let method = solver.method();
    let config = solver.config();
    let last = trace.last();

    if trace
        .iter()
        .any(|p| !p.point().is_finite() || !p.value.is_finite())
    {
        warn!(
            method = %method,
            "Non-finite iterate recorded (second derivative vanished or iterates diverged)"
        );
    }

    if is_stationary(last.point(), config.tolerance()) {
        debug!(
            method = %method,
            iterations = trace.iterations(),
            x1 = last.x1,
            x2 = last.x2,
            value = last.value,
            "Converged"
        );
    } else {
        warn!(
            method = %method,
            max_iterations = config.max_iterations(),
            x1 = last.x1,
            x2 = last.x2,
            "Iteration bound reached before stationarity"
        );
    }
}
