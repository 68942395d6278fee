//! The fixed objective and its closed-form partial derivatives.
//!
//! ```text
//! f(x1, x2) = 2·x1³ + x1·x2² − 216·x1
//! ```
//!
//! All functions are pure and total. For this `f` the second derivative with
//! respect to `x2` is `2·x1`, which is also the value of the mixed partial; the
//! solvers divide by it when updating `x2`.
//!
//! The only interior local minimum is `(6, 0)` with `f = -864`.

use crate::types::Point;

/// Human-readable form of the objective.
pub const EXPRESSION: &str = "2*x1^3 + x1*x2^2 - 216*x1";

/// Objective value `f(x1, x2)`.
///
/// # Examples
/// ```
/// use optimiser_core::objective;
/// use optimiser_core::types::Point;
///
/// assert_eq!(objective::value(Point::new(6.0, 0.0)), -864.0);
/// ```
#[inline]
pub fn value(p: Point) -> f64 {
    2.0 * p.x1.powi(3) + p.x1 * p.x2.powi(2) - 216.0 * p.x1
}

/// `∂f/∂x1 = 6·x1² + x2² − 216`
#[inline]
pub fn first_partial_x1(p: Point) -> f64 {
    6.0 * p.x1.powi(2) + p.x2.powi(2) - 216.0
}

/// `∂f/∂x2 = 2·x1·x2`
#[inline]
pub fn first_partial_x2(p: Point) -> f64 {
    2.0 * p.x1 * p.x2
}

/// `∂²f/∂x1² = 12·x1`
#[inline]
pub fn second_partial_x1(p: Point) -> f64 {
    12.0 * p.x1
}

/// `∂²f/∂x2² = 2·x1`
#[inline]
pub fn second_partial_x2(p: Point) -> f64 {
    2.0 * p.x1
}

/// Gradient `(∂f/∂x1, ∂f/∂x2)` packed as a [`Point`].
#[inline]
pub fn gradient(p: Point) -> Point {
    Point::new(first_partial_x1(p), first_partial_x2(p))
}
