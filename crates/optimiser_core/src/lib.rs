//! # optimiser_core: Descent Methods for a Fixed Bivariate Objective
//!
//! ## Kernel Role
//!
//! optimiser_core is the bottom layer of the workspace. It holds everything with
//! numerical content and performs no I/O:
//! - The objective `f(x1, x2) = 2·x1³ + x1·x2² − 216·x1` and its closed-form
//!   partial derivatives (`objective`)
//! - The stationarity test shared by every solver (`convergence`)
//! - Point, trace and result types (`types`)
//! - Gradient descent with step-halving, coordinate-wise Newton descent and
//!   full Newton's method (`solvers`)
//!
//! ## Usage Examples
//!
//! ```rust
//! use optimiser_core::solvers::{DescentConfig, DescentSolver, NewtonSolver};
//! use optimiser_core::types::Point;
//!
//! let config = DescentConfig::new(0.01, 1000, 1.0).unwrap();
//! let trace = NewtonSolver::new(config).minimise(Point::new(10.0, 10.0));
//!
//! let last = trace.last();
//! assert!((last.x1 - 6.0).abs() < 1e-3);
//! assert!(last.x2.abs() < 1e-3);
//! ```
//!
//! ## Numerical Limitations
//!
//! The coordinate and Newton solvers divide by second derivatives that vanish on
//! `x1 = 0`. The resulting infinities and NaNs are recorded in the trace as-is.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod convergence;
pub mod objective;
pub mod solvers;
pub mod types;
