//! Newton's method on both coordinates.

use tracing::{debug, trace};

use super::{log_outcome, DescentConfig, DescentSolver, Method};
use crate::convergence::is_stationary;
use crate::objective::{first_partial_x1, first_partial_x2, second_partial_x1, second_partial_x2};
use crate::types::{Point, Trace, TracePoint};

/// Newton iteration `x_{k+1} = x_k - ∂f/∂x / ∂²f/∂x²` applied to both
/// coordinates every iteration.
///
/// Unlike [`CoordinateDescentSolver`](super::CoordinateDescentSolver) there is
/// no per-coordinate tolerance guard. Starting on `x1 = 0` divides by zero and
/// the non-finite result is recorded as-is.
///
/// # Example
///
/// ```
/// use optimiser_core::solvers::{DescentConfig, DescentSolver, NewtonSolver};
/// use optimiser_core::types::Point;
///
/// let solver = NewtonSolver::new(DescentConfig::new(1e-6, 1000, 1.0).unwrap());
/// let trace = solver.minimise(Point::new(0.0, 0.0));
///
/// assert!(!trace[1].x1.is_finite());
/// ```
#[derive(Debug, Clone)]
pub struct NewtonSolver {
    config: DescentConfig,
}

impl NewtonSolver {
    /// Create a new Newton solver.
    pub fn new(config: DescentConfig) -> Self {
        Self { config }
    }
}

impl DescentSolver for NewtonSolver {
    fn method(&self) -> Method {
        Method::Newton
    }

    fn config(&self) -> &DescentConfig {
        &self.config
    }

    fn minimise(&self, start: Point) -> Trace {
        let tolerance = self.config.tolerance();
        let max_iterations = self.config.max_iterations();
        let mut history = Trace::starting_at(start);

        debug!(method = %self.method(), start = %start, tolerance, "Starting");

        while history.iterations() < max_iterations
            && !is_stationary(history.last().point(), tolerance)
        {
            let p = history.last().point();
            let next = TracePoint::evaluate(Point::new(
                p.x1 - first_partial_x1(p) / second_partial_x1(p),
                p.x2 - first_partial_x2(p) / second_partial_x2(p),
            ));
            trace!(
                iteration = history.iterations() + 1,
                x1 = next.x1,
                x2 = next.x2,
                value = next.value,
                "Iteration"
            );
            history.push(next);
        }

        log_outcome(self, &history);
        history
    }
}
