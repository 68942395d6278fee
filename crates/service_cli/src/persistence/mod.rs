//! Trace output destinations.

mod file_writer;

pub use file_writer::TraceWriter;

use std::path::PathBuf;

use optimiser_core::solvers::Method;
use optimiser_core::types::{SolverResult, Trace};

use crate::Result;

/// Destination for finished traces.
///
/// `store` is called from the async result loop itself, so a slow
/// implementation delays the handling of later results but never the
/// solvers, which run on the blocking pool.
pub trait TraceSink: Send + Sync {
    /// Persist `trace` under `stem`, returning where it went.
    fn store(&self, stem: &str, trace: &Trace) -> Result<PathBuf>;
}

/// File stem for a method's result: the method prefix followed by the
/// starting-point label, e.g. `Newton(10,10)`.
pub fn file_stem(method: Method, result: &SolverResult) -> String {
    format!("{}{}", method.file_prefix(), result.label())
}

/// One line per record, `(x1, x2) | f`.
pub fn format_trace(trace: &Trace) -> String {
    let mut content = String::new();
    for p in trace {
        content.push_str(&format!("({}, {}) | {}\n", p.x1, p.x2, p.value));
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use optimiser_core::types::{Point, TracePoint};

    #[test]
    fn test_file_stem() {
        let result = SolverResult::new(Trace::starting_at(Point::new(10.0, -0.5)));
        assert_eq!(
            file_stem(Method::GradientDescent, &result),
            "Gradient_method(10,-0.5)"
        );
        assert_eq!(
            file_stem(Method::CoordinateDescent, &result),
            "Coordinate_Descent(10,-0.5)"
        );
        assert_eq!(file_stem(Method::Newton, &result), "Newton(10,-0.5)");
    }

    #[test]
    fn test_format_trace() {
        let mut trace = Trace::starting_at(Point::new(10.0, 10.0));
        trace.push(TracePoint::evaluate(Point::new(6.0, 0.0)));

        assert_eq!(format_trace(&trace), "(10, 10) | 840\n(6, 0) | -864\n");
    }

    #[test]
    fn test_format_trace_uses_natural_decimals() {
        let trace = Trace::starting_at(Point::new(0.5, -0.25));
        // 2·0.125 + 0.5·0.0625 - 108
        assert_eq!(format_trace(&trace), "(0.5, -0.25) | -107.71875\n");
    }

    #[test]
    fn test_format_trace_never_uses_exponents() {
        // Magnitudes reached by diverging gradient descent from (10,10)
        let mut trace = Trace::starting_at(Point::new(10.0, 10.0));
        trace.push(TracePoint {
            x1: 1e21,
            x2: -2.5e-7,
            value: -8.768e109,
        });

        let content = format_trace(&trace);
        let last = content.lines().last().unwrap();
        assert_eq!(
            last,
            format!(
                "(1000000000000000000000, -0.00000025) | -8768{}",
                "0".repeat(106)
            )
        );
    }
}
