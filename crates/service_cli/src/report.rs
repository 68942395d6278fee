//! Console summary of a finished solver run.

use optimiser_core::solvers::Method;
use optimiser_core::types::SolverResult;

/// Format the best point, its value and the iteration count.
///
/// ```text
/// ----Best results of Newton method-----
/// Newton method with starting point(10,10) X1 and X2: (6, 0)
/// Newton method with starting point(10,10) F: -864
/// Newton method with starting point(10,10) K: 5
/// ```
pub fn summary(method: Method, result: &SolverResult) -> String {
    let name = method.name();
    let label = result.label();
    let best = result.best();

    format!(
        "----Best results of {name}-----\n\
         {name} with starting point{label} X1 and X2: ({x1}, {x2})\n\
         {name} with starting point{label} F: {value}\n\
         {name} with starting point{label} K: {k}\n",
        x1 = best.x1,
        x2 = best.x2,
        value = best.value,
        k = result.iterations(),
    )
}

/// Print [`summary`] to stdout.
pub fn print_summary(method: Method, result: &SolverResult) {
    print!("{}", summary(method, result));
}
