//! Simulation engine: capacity pool, customer tasks, capacity controller,
//! statistics, and the final report.

pub mod error;
pub mod capacity_pool;
pub mod controller;
pub mod customer;
pub mod report;
pub mod service;
pub mod simulation;
pub mod stats;

pub use error::{AppResult, SimulationError};
pub use capacity_pool::{CapacityPool, PoolStatus, ResizeOutcome, Slot, MAX_SERVERS, MIN_SERVERS};
pub use controller::{
    CapacityController, Command, CommandSender, ControllerSummary, DEFAULT_COMMAND_QUEUE,
};
pub use customer::{serve_customer, CustomerId, CustomerRecord};
pub use report::Report;
pub use service::{FixedServiceTime, ServiceTime, UniformServiceTime};
pub use simulation::{Simulation, SimulationContext, SimulationOutcome};
pub use stats::{StatsCollector, StatsSnapshot};
