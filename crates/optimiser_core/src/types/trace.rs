//! Append-only iteration history.

use std::ops::Index;

use super::point::{Point, TracePoint};

/// Ordered record of every point a solver visited.
///
/// Index 0 is always the starting point with its exact objective value, and
/// `len() - 1` is the number of iterations performed. A trace can only grow.
///
/// # Examples
/// ```
/// use optimiser_core::types::{Point, Trace, TracePoint};
///
/// let mut trace = Trace::starting_at(Point::new(10.0, 10.0));
/// assert_eq!(trace.iterations(), 0);
///
/// trace.push(TracePoint::evaluate(Point::new(6.0, 0.0)));
/// assert_eq!(trace.len(), 2);
/// assert_eq!(trace.last().value, -864.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    points: Vec<TracePoint>,
}

#[allow(clippy::len_without_is_empty)]
impl Trace {
    /// Create a trace holding only the evaluated starting point.
    pub fn starting_at(start: Point) -> Self {
        Self {
            points: vec![TracePoint::evaluate(start)],
        }
    }

    /// Append a record.
    pub fn push(&mut self, point: TracePoint) {
        self.points.push(point);
    }

    /// The starting record.
    pub fn first(&self) -> &TracePoint {
        &self.points[0]
    }

    /// The most recent record.
    pub fn last(&self) -> &TracePoint {
        &self.points[self.points.len() - 1]
    }

    /// Number of records, always at least 1.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Number of iterations performed (`len() - 1`).
    pub fn iterations(&self) -> usize {
        self.points.len() - 1
    }

    /// Iterate over the records in visiting order.
    pub fn iter(&self) -> std::slice::Iter<'_, TracePoint> {
        self.points.iter()
    }

    /// All records as a slice.
    pub fn as_slice(&self) -> &[TracePoint] {
        &self.points
    }
}

impl Index<usize> for Trace {
    type Output = TracePoint;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TracePoint;
    type IntoIter = std::slice::Iter<'a, TracePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// A finished trace labelled with its starting point.
///
/// The label has the form `(x1,x2)` and is used for report headings and
/// output file names.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverResult {
    label: String,
    trace: Trace,
}

impl SolverResult {
    /// Wrap a finished trace, deriving the label from its first record.
    ///
    /// # Examples
    /// ```
    /// use optimiser_core::types::{Point, SolverResult, Trace};
    ///
    /// let result = SolverResult::new(Trace::starting_at(Point::new(10.0, -2.5)));
    /// assert_eq!(result.label(), "(10,-2.5)");
    /// ```
    pub fn new(trace: Trace) -> Self {
        let start = trace.first();
        let label = format!("({},{})", start.x1, start.x2);
        Self { label, trace }
    }

    /// Starting point label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The full trace.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// The final record, reported as the best point found.
    pub fn best(&self) -> &TracePoint {
        self.trace.last()
    }

    /// Iterations performed.
    pub fn iterations(&self) -> usize {
        self.trace.iterations()
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trace_holds_start() {
        let trace = Trace::starting_at(Point::new(1.0, 2.0));
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.iterations(), 0);
        assert_eq!(trace.first(), trace.last());
        assert_eq!(trace.first().point(), Point::new(1.0, 2.0));
    }

    #[test]
    fn test_push_appends_in_order() {
        let mut trace = Trace::starting_at(Point::new(0.0, 0.0));
        trace.push(TracePoint::evaluate(Point::new(1.0, 0.0)));
        trace.push(TracePoint::evaluate(Point::new(2.0, 0.0)));

        let xs: Vec<f64> = trace.iter().map(|p| p.x1).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0]);
        assert_eq!(trace[1].x1, 1.0);
        assert_eq!(trace.iterations(), 2);
    }

    #[test]
    fn test_result_label_uses_start() {
        let mut trace = Trace::starting_at(Point::new(0.5, 3.0));
        trace.push(TracePoint::evaluate(Point::new(6.0, 0.0)));

        let result = SolverResult::new(trace);
        assert_eq!(result.label(), "(0.5,3)");
        assert_eq!(result.best().point(), Point::new(6.0, 0.0));
        assert_eq!(result.iterations(), 1);
    }
}
