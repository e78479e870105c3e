//! Interactive checkout-lane simulation.
//!
//! Asks for the number of open counters and the number of customers, runs the
//! simulation while accepting live `increase`/`decrease` commands on stdin, and
//! prints the final report.

use std::io;

use anyhow::Context;

use checkout_lanes::cli::{prompt_run_config, spawn_command_reader, COMMAND_HINT};
use checkout_lanes::config::{ReportFormat, SimulationConfig};
use checkout_lanes::core::{AppResult, Simulation};
use checkout_lanes::util::init_tracing;

#[tokio::main]
async fn main() -> AppResult<()> {
    init_tracing();

    let base = SimulationConfig::from_env().map_err(anyhow::Error::msg)?;
    let config = prompt_run_config(&mut io::stdin().lock(), &mut io::stdout(), base)?;
    let format = config.report_format;

    let simulation = Simulation::new(config).context("starting simulation")?;
    println!("{COMMAND_HINT}");
    // Detached: the reader stays blocked on stdin until the process exits.
    let _reader = spawn_command_reader(io::BufReader::new(io::stdin()), simulation.commands());

    let report = simulation.run().await?;
    match format {
        ReportFormat::Text => println!("\n{report}"),
        ReportFormat::Json => println!("{}", report.to_json()?),
    }
    println!("All customers have been served. Shutting down.");
    Ok(())
}
