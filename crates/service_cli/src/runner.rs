//! One interactive session: banner, prompts, validation and the concurrent run.

use std::io::{BufRead, Write};

use optimiser_core::objective;
use optimiser_core::solvers::DescentConfig;
use tracing::debug;

use crate::config::RunConfig;
use crate::input::read_start_input;
use crate::orchestrator::{self, Completed};
use crate::persistence::TraceSink;
use crate::Result;

/// Run a full session against the given input, prompt output and sink.
///
/// Nothing is solved or stored unless all three values parse and the
/// tolerance is accepted by [`DescentConfig::new`].
///
/// # Errors
///
/// - [`CliError::InvalidInput`](crate::CliError::InvalidInput) if a value is not a number
/// - [`CliError::Solver`](crate::CliError::Solver) if the tolerance is negative or non-finite
/// - [`CliError::Io`](crate::CliError::Io) if the banner or prompts cannot be written
pub async fn run_session<R, W>(
    reader: &mut R,
    out: &mut W,
    settings: &RunConfig,
    sink: &dyn TraceSink,
) -> Result<Vec<Completed>>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "Current function: {}", objective::EXPRESSION)?;

    let input = read_start_input(reader, out)?;
    let config = DescentConfig::new(
        input.tolerance,
        settings.max_iterations,
        settings.initial_step,
    )?;

    debug!(start = %input.start, tolerance = input.tolerance, "Input accepted");
    Ok(orchestrator::run(input.start, config, sink).await)
}
