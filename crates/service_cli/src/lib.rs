//! Descent runner service layer
//!
//! Reads a starting point and tolerance, runs the three descent methods of
//! `optimiser_core` concurrently, prints a summary for each and writes every
//! trace to a text file.
//!
//! # Architecture
//!
//! As part of the **S**ervice layer this crate owns all I/O; the solvers in
//! `optimiser_core` stay pure.

pub mod config;
pub mod error;
pub mod input;
pub mod orchestrator;
pub mod persistence;
pub mod report;
pub mod runner;

pub use error::{CliError, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
