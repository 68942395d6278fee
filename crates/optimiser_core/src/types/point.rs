//! Points in the `(x1, x2)` plane.

use std::fmt;

use crate::objective;

/// An immutable point `(x1, x2)`.
///
/// Solvers never mutate a point in place; every iteration produces a new one.
///
/// # Examples
/// ```
/// use optimiser_core::types::Point;
///
/// let p = Point::new(6.0, 0.0);
/// assert_eq!(format!("{}", p), "(6, 0)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// First coordinate
    pub x1: f64,
    /// Second coordinate
    pub x2: f64,
}

impl Point {
    /// Create a point from its coordinates.
    pub const fn new(x1: f64, x2: f64) -> Self {
        Self { x1, x2 }
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x1.is_finite() && self.x2.is_finite()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x1, self.x2)
    }
}

/// A visited point together with the objective value at that point.
///
/// Created once per iteration via [`TracePoint::evaluate`] and never modified
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracePoint {
    /// First coordinate
    pub x1: f64,
    /// Second coordinate
    pub x2: f64,
    /// Objective value `f(x1, x2)`
    pub value: f64,
}

impl TracePoint {
    /// Evaluate the objective at `point` and record the result.
    ///
    /// # Examples
    /// ```
    /// use optimiser_core::types::{Point, TracePoint};
    ///
    /// let tp = TracePoint::evaluate(Point::new(6.0, 0.0));
    /// assert_eq!(tp.value, -864.0);
    /// ```
    pub fn evaluate(point: Point) -> Self {
        Self {
            x1: point.x1,
            x2: point.x2,
            value: objective::value(point),
        }
    }

    /// The coordinates of this record.
    pub fn point(&self) -> Point {
        Point::new(self.x1, self.x2)
    }
}
