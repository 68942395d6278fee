//! Interactive input of the starting point and tolerance.

use std::io::{BufRead, Write};

use optimiser_core::types::Point;

use crate::{CliError, Result};

/// Values entered at the prompts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StartInput {
    /// Starting point shared by all solvers
    pub start: Point,
    /// Stationarity tolerance `e`
    pub tolerance: f64,
}

/// Prompt for `X1`, `X2` and the accuracy, then parse them.
///
/// All three lines are read before any is parsed, so a bad first value still
/// consumes the remaining prompts. Surrounding whitespace, including a
/// trailing `\r\n`, is ignored.
///
/// # Errors
///
/// Returns [`CliError::InvalidInput`] for the first value that is not a
/// number, or [`CliError::Io`] if the prompts cannot be written or read.
pub fn read_start_input<R, W>(reader: &mut R, prompt: &mut W) -> Result<StartInput>
where
    R: BufRead,
    W: Write,
{
    let x1 = ask(reader, prompt, "Enter X1: ")?;
    let x2 = ask(reader, prompt, "Enter X2: ")?;
    let e = ask(reader, prompt, "Enter Accuracy: ")?;

    Ok(StartInput {
        start: Point::new(parse("X1", &x1)?, parse("X2", &x2)?),
        tolerance: parse("Accuracy", &e)?,
    })
}

fn ask<R, W>(reader: &mut R, prompt: &mut W, label: &str) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(prompt, "{}", label)?;
    prompt.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line)
}

fn parse(field: &'static str, raw: &str) -> Result<f64> {
    let value = raw.trim();
    value.parse::<f64>().map_err(|_| CliError::InvalidInput {
        field,
        value: value.to_string(),
    })
}
