//! Stationarity test shared by all solvers.

use crate::objective::{first_partial_x1, first_partial_x2};
use crate::types::Point;

/// Returns `true` if both first partial derivatives at `point` lie within
/// `tolerance` of zero.
///
/// NaN partials never compare as within tolerance, so a point with a NaN or
/// infinite coordinate is never stationary.
///
/// # Examples
/// ```
/// use optimiser_core::convergence::is_stationary;
/// use optimiser_core::types::Point;
///
/// assert!(is_stationary(Point::new(6.0, 0.0), 0.0));
/// assert!(!is_stationary(Point::new(0.0, 0.0), 1e-6));
/// ```
pub fn is_stationary(point: Point, tolerance: f64) -> bool {
    first_partial_x1(point).abs() <= tolerance && first_partial_x2(point).abs() <= tolerance
}
