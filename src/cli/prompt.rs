//! Startup prompts for the two interactive run parameters.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{bail, Context};

use crate::config::SimulationConfig;
use crate::core::{AppResult, MAX_SERVERS, MIN_SERVERS};

/// Ask for the counter count and customer count, re-asking on invalid answers.
///
/// Every other field is taken from `base`.
pub fn prompt_run_config<R, W>(
    input: &mut R,
    output: &mut W,
    base: SimulationConfig,
) -> AppResult<SimulationConfig>
where
    R: BufRead,
    W: Write,
{
    let initial_capacity = ask(
        input,
        output,
        &format!("Enter the number of checkout counters available (maximum {MAX_SERVERS}): "),
        |n: &u32| {
            if (MIN_SERVERS..=MAX_SERVERS).contains(n) {
                Ok(())
            } else {
                Err(format!("must be between {MIN_SERVERS} and {MAX_SERVERS}"))
            }
        },
    )?;
    let customer_count = ask(
        input,
        output,
        "Enter the total number of customers: ",
        |_: &u32| Ok(()),
    )?;

    let config = SimulationConfig {
        initial_capacity,
        customer_count,
        ..base
    };
    config.validate().map_err(anyhow::Error::msg)?;
    Ok(config)
}

fn ask<T, R, W>(
    input: &mut R,
    output: &mut W,
    question: &str,
    check: impl Fn(&T) -> Result<(), String>,
) -> AppResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(output, "{question}")?;
        output.flush()?;

        line.clear();
        let read = input.read_line(&mut line).context("reading answer")?;
        if read == 0 {
            bail!("input closed before answering: {}", question.trim_end());
        }

        match line.trim().parse::<T>() {
            Ok(value) => match check(&value) {
                Ok(()) => return Ok(value),
                Err(reason) => writeln!(output, "Invalid value: {reason}.")?,
            },
            Err(e) => writeln!(output, "Invalid number: {e}.")?,
        }
    }
}
