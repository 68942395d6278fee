//! Point, trace and error types.
//!
//! This module provides:
//! - `point`: [`Point`] and [`TracePoint`], the immutable per-iteration records
//! - `trace`: [`Trace`], the append-only iteration history, and [`SolverResult`]
//! - `error`: [`ConfigError`] for rejected solver configurations

pub mod error;
pub mod point;
pub mod trace;

pub use error::ConfigError;
pub use point::{Point, TracePoint};
pub use trace::{SolverResult, Trace};
