//! Gradient descent with step-halving backtracking.

use tracing::{debug, trace};

use super::{log_outcome, DescentConfig, DescentSolver, Method};
use crate::convergence::is_stationary;
use crate::objective;
use crate::types::{Point, Trace, TracePoint};

/// Steepest descent with a halving line search.
///
/// Each outer iteration starts from `initial_step` and halves it until the
/// candidate `x - step·∇f(x)` has a strictly lower objective value than the
/// last recorded one, trying at most `max_iterations` times. If no try
/// improves, the last candidate is recorded anyway, so the trace is
/// non-increasing only while the search keeps succeeding.
///
/// # Example
///
/// ```
/// use optimiser_core::solvers::{DescentConfig, DescentSolver, GradientDescentSolver};
/// use optimiser_core::types::Point;
///
/// let solver = GradientDescentSolver::new(DescentConfig::new(1e-3, 1000, 1.0).unwrap());
/// let trace = solver.minimise(Point::new(5.0, 1.0));
///
/// assert!(trace.last().value < trace.first().value);
/// ```
#[derive(Debug, Clone)]
pub struct GradientDescentSolver {
    config: DescentConfig,
}

impl GradientDescentSolver {
    /// Create a new gradient descent solver.
    pub fn new(config: DescentConfig) -> Self {
        Self { config }
    }

    /// Search along `-∇f(current)` for a strictly better point.
    ///
    /// Returns the accepted candidate, or the last one tried if the try budget
    /// ran out, together with whether it improved on `current`.
    fn backtrack(&self, current: &TracePoint) -> (TracePoint, bool) {
        let origin = current.point();
        let grad = objective::gradient(origin);
        let mut step = self.config.initial_step();
        let mut candidate = *current;
        let mut tries = 0;

        // A NaN value compares false here and leaves `candidate` at `current`.
        while tries < self.config.max_iterations() && candidate.value >= current.value {
            candidate = TracePoint::evaluate(Point::new(
                origin.x1 - step * grad.x1,
                origin.x2 - step * grad.x2,
            ));
            step /= 2.0;
            tries += 1;
        }

        let improved = candidate.value < current.value;
        if !improved {
            debug!(tries, "Backtracking exhausted without improvement");
        }
        (candidate, improved)
    }
}

impl DescentSolver for GradientDescentSolver {
    fn method(&self) -> Method {
        Method::GradientDescent
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
            let (next, improved) = self.backtrack(history.last());
            trace!(
                iteration = history.iterations() + 1,
                x1 = next.x1,
                x2 = next.x2,
                value = next.value,
                improved,
                "Iteration"
            );
            history.push(next);
        }

        log_outcome(self, &history);
        history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn solver(tolerance: f64, max_iterations: usize) -> GradientDescentSolver {
        GradientDescentSolver::new(DescentConfig::new(tolerance, max_iterations, 1.0).unwrap())
    }

    #[test]
    fn test_stationary_start_returns_single_entry() {
        let trace = solver(1e-6, 1000).minimise(Point::new(6.0, 0.0));
        assert_eq!(trace.len(), 1);
        assert_eq!(trace[0], TracePoint::evaluate(Point::new(6.0, 0.0)));
    }

    #[test]
    fn test_first_step_is_halved_until_improvement() {
        // ∇f(5, 1) = (-65, 10), f(5, 1) = -825. Steps 1 .. 1/32 overshoot; 1/64 is
        // the first to improve.
        let trace = solver(1e-6, 1000).minimise(Point::new(5.0, 1.0));
        assert!(trace.len() >= 2);

        let step = 1.0 / 64.0;
        assert_relative_eq!(trace[1].x1, 5.0 + 65.0 * step);
        assert_relative_eq!(trace[1].x2, 1.0 - 10.0 * step);
        assert!(trace[1].value < trace[0].value);
    }

    #[test]
    fn test_exhausted_search_appends_last_candidate() {
        // A single try takes the full step even though it is worse.
        let solver = solver(1e-6, 1);
        let trace = solver.minimise(Point::new(5.0, 1.0));

        assert_eq!(trace.len(), 2);
        assert_eq!(trace[1].point(), Point::new(70.0, -9.0));
        assert_eq!(trace[1].value, 676_550.0);
        assert!(trace[1].value > trace[0].value);

        let (_, improved) = solver.backtrack(&trace[0]);
        assert!(!improved);
    }

    #[test]
    fn test_step_resets_every_outer_iteration() {
        let solver = solver(1e-6, 1000);
        let trace = solver.minimise(Point::new(5.0, 1.0));
        assert!(trace.len() > 2);

        // Re-running backtracking from any recorded point reproduces the next
        // record, so no step length carries over between iterations.
        for window in trace.as_slice().windows(2) {
            let (next, _) = solver.backtrack(&window[0]);
            assert_eq!(next, window[1]);
        }
    }

    #[test]
    fn test_values_never_increase_with_full_budget() {
        let trace = solver(1e-3, 1000).minimise(Point::new(5.0, 1.0));
        for window in trace.as_slice().windows(2) {
            assert!(window[1].value <= window[0].value);
        }
    }

    #[test]
    fn test_converges_near_local_minimum() {
        let trace = solver(1e-4, 1000).minimise(Point::new(5.0, 1.0));
        assert!(trace.len() < 1001);

        let last = trace.last();
        assert!(is_stationary(last.point(), 1e-4));
        assert_relative_eq!(last.x1, 6.0, epsilon = 1e-4);
        assert_relative_eq!(last.x2, 0.0, epsilon = 1e-4);
    }
}
