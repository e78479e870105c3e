//! # Checkout Lanes
//!
//! A concurrent simulation of supermarket checkout lanes: customers arrive at a
//! fixed cadence, queue for one of a bounded set of counters, get served for a
//! random duration, and leave. The number of open counters can be changed while
//! the simulation runs, and a statistics report is produced once every customer
//! has been served.
//!
//! ## Key Pieces
//!
//! - **Capacity Pool**: a resizable permit pool (`tokio::sync::Semaphore`) with a
//!   consistent occupancy/capacity snapshot
//! - **Customer Task**: one tokio task per customer measuring its own wait
//! - **Capacity Controller**: a command loop that opens or closes counters
//! - **Statistics Collector**: completion-ordered wait times plus a
//!   dissatisfaction counter
//! - **Report**: the final summary, printable or serializable
//!
//! ```rust,ignore
//! use checkout_lanes::config::SimulationConfig;
//! use checkout_lanes::core::{Command, Simulation};
//!
//! let config = SimulationConfig::new(2, 8);
//! let simulation = Simulation::new(config)?;
//! let commands = simulation.commands();
//!
//! let run = tokio::spawn(simulation.run());
//! commands.send(Command::Increase).await?;
//!
//! let report = run.await??;
//! println!("{report}");
//! ```
//!
//! For complete scenarios, see `tests/simulation_scenarios_test.rs`.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Simulation engine: capacity pool, customers, controller, statistics, report.
pub mod core;
/// Run configuration and its validation.
pub mod config;
/// Interactive shell helpers: startup prompts and live command forwarding.
pub mod cli;
/// Shared utilities.
pub mod util;
