//! Coordinate-wise Newton descent.

use tracing::{debug, trace};

use super::{log_outcome, DescentConfig, DescentSolver, Method};
use crate::convergence::is_stationary;
use crate::objective::{first_partial_x1, first_partial_x2, second_partial_x1, second_partial_x2};
use crate::types::{Point, Trace, TracePoint};

/// Applies a one-variable Newton step to each coordinate independently.
///
/// A coordinate whose first partial is already within tolerance is left
/// unchanged. Every computed point is recorded; there is no acceptance test.
///
/// On `x1 = 0` the divisors vanish and the update yields infinities or NaN,
/// which are recorded without being detected.
#[derive(Debug, Clone)]
pub struct CoordinateDescentSolver {
    config: DescentConfig,
}

impl CoordinateDescentSolver {
    /// Create a new coordinate descent solver.
    pub fn new(config: DescentConfig) -> Self {
        Self { config }
    }

    fn step(&self, p: Point) -> Point {
        let tolerance = self.config.tolerance();

        let d1 = first_partial_x1(p);
        let x1 = if d1.abs() > tolerance {
            p.x1 - d1 / second_partial_x1(p)
        } else {
            p.x1
        };

        let d2 = first_partial_x2(p);
        let x2 = if d2.abs() > tolerance {
            p.x2 - d2 / second_partial_x2(p)
        } else {
            p.x2
        };

        Point::new(x1, x2)
    }
}

impl DescentSolver for CoordinateDescentSolver {
    fn method(&self) -> Method {
        Method::CoordinateDescent
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
            let next = TracePoint::evaluate(self.step(history.last().point()));
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
