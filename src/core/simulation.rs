//! Simulation context and launcher.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::SimulationConfig;

use super::{
    serve_customer, CapacityController, CapacityPool, CommandSender, ControllerSummary,
    CustomerRecord, PoolStatus, Report, ServiceTime, SimulationError, StatsCollector,
    UniformServiceTime, DEFAULT_COMMAND_QUEUE,
};

/// Shared state handed to every task of one run.
///
/// Cloning is cheap; all mutable state sits behind `Arc`s, so separate
/// simulations never share counters.
#[derive(Clone)]
pub struct SimulationContext {
    /// Counters customers compete for.
    pub pool: Arc<CapacityPool>,
    /// Wait-time accumulator.
    pub stats: Arc<StatsCollector>,
    /// Source of service durations.
    pub service: Arc<dyn ServiceTime>,
    /// Wall-clock length of one unit.
    pub time_unit: Duration,
    /// Waits above this many units count as dissatisfied.
    pub dissatisfaction_threshold_units: u64,
    /// Identifier attached to this run's log span.
    pub run_id: Uuid,
}

impl SimulationContext {
    /// Fresh context for `config`, with its own pool and collector.
    pub fn new(config: &SimulationConfig, service: Arc<dyn ServiceTime>) -> Self {
        Self {
            pool: Arc::new(CapacityPool::new(config.initial_capacity)),
            stats: Arc::new(StatsCollector::new()),
            service,
            time_unit: config.time_unit(),
            dissatisfaction_threshold_units: config.dissatisfaction_threshold_units,
            run_id: Uuid::new_v4(),
        }
    }

    /// Wall-clock duration of `units` units.
    pub fn units(&self, units: u64) -> Duration {
        self.time_unit
            .saturating_mul(u32::try_from(units).unwrap_or(u32::MAX))
    }

    /// Whole units contained in `elapsed`, truncated.
    pub fn to_units(&self, elapsed: Duration) -> u64 {
        let units = elapsed.as_nanos() / self.time_unit.as_nanos().max(1);
        u64::try_from(units).unwrap_or(u64::MAX)
    }
}

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    /// Final statistics report.
    pub report: Report,
    /// Per-customer records, ordered by customer id.
    pub customers: Vec<CustomerRecord>,
    /// What the capacity controller did.
    pub controller: ControllerSummary,
    /// Pool state after every customer left.
    pub final_status: PoolStatus,
}

/// One configured simulation, ready to run.
pub struct Simulation {
    config: SimulationConfig,
    ctx: SimulationContext,
    controller: CapacityController,
    commands: CommandSender,
}

impl Simulation {
    /// Validate `config` and prepare a run with uniformly drawn service times.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate().map_err(SimulationError::InvalidConfig)?;

        let service = Arc::new(UniformServiceTime::new(
            config.service_min_units,
            config.service_max_units,
        ));
        let ctx = SimulationContext::new(&config, service);
        let (controller, commands) =
            CapacityController::new(Arc::clone(&ctx.pool), DEFAULT_COMMAND_QUEUE);

        Ok(Self {
            config,
            ctx,
            controller,
            commands,
        })
    }

    /// Replace the service duration source.
    #[must_use]
    pub fn with_service_time(mut self, service: impl ServiceTime) -> Self {
        self.ctx.service = Arc::new(service);
        self
    }

    /// Handle for resizing the pool while the run is in flight.
    pub fn commands(&self) -> CommandSender {
        self.commands.clone()
    }

    /// Shared state of this run.
    pub const fn context(&self) -> &SimulationContext {
        &self.ctx
    }

    /// Run to completion and return the report.
    pub async fn run(self) -> Result<Report, SimulationError> {
        self.run_detailed().await.map(|outcome| outcome.report)
    }

    /// Run to completion and return the report plus per-customer detail.
    ///
    /// Every customer is joined before the controller is stopped and before the
    /// statistics are read.
    pub async fn run_detailed(self) -> Result<SimulationOutcome, SimulationError> {
        let span = tracing::info_span!("simulation", run_id = %self.ctx.run_id);
        self.launch().instrument(span).await
    }

    async fn launch(self) -> Result<SimulationOutcome, SimulationError> {
        let Self {
            config,
            ctx,
            controller,
            commands,
        } = self;
        drop(commands);

        tracing::info!(
            "opening {} counters for {} customers",
            ctx.pool.capacity(),
            config.customer_count
        );

        let (stop_tx, stop_rx) = oneshot::channel();
        let controller = tokio::spawn(controller.run(stop_rx).in_current_span());

        let arrival_interval = ctx.units(config.arrival_interval_units);
        let mut customers = Vec::with_capacity(config.customer_count as usize);
        for id in 0..config.customer_count {
            customers.push((
                id,
                tokio::spawn(serve_customer(id, ctx.clone()).in_current_span()),
            ));
            if id + 1 < config.customer_count && !arrival_interval.is_zero() {
                tokio::time::sleep(arrival_interval).await;
            }
        }

        let mut records = Vec::with_capacity(customers.len());
        let mut failure = None;
        for (id, handle) in customers {
            match handle.await {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::error!("customer {} task failed: {}", id, e);
                    failure.get_or_insert_with(|| format!("customer {id}: {e}"));
                }
            }
        }

        let _ = stop_tx.send(());
        let controller = controller
            .await
            .map_err(|e| SimulationError::TaskFailed(format!("capacity controller: {e}")))?;

        if let Some(reason) = failure {
            return Err(SimulationError::TaskFailed(reason));
        }

        let report = Report::from_snapshot(
            ctx.stats.snapshot(),
            ctx.dissatisfaction_threshold_units,
        );
        tracing::info!("all customers served, shutting down");

        Ok(SimulationOutcome {
            report,
            customers: records,
            controller,
            final_status: ctx.pool.status(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedServiceTime;

    #[test]
    fn test_to_units_truncates() {
        let ctx = SimulationContext::new(
            &SimulationConfig::default(),
            Arc::new(FixedServiceTime(6)),
        );
        assert_eq!(ctx.to_units(Duration::from_millis(5_999)), 5);
        assert_eq!(ctx.to_units(Duration::from_secs(6)), 6);
        assert_eq!(ctx.to_units(Duration::ZERO), 0);
        assert_eq!(ctx.units(3), Duration::from_secs(3));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = Simulation::new(SimulationConfig::new(11, 3));
        assert!(matches!(result, Err(SimulationError::InvalidConfig(_))));

        let result = Simulation::new(SimulationConfig::new(0, 3));
        assert!(matches!(result, Err(SimulationError::InvalidConfig(_))));
    }

    #[test]
    fn test_contexts_are_independent() {
        let first = Simulation::new(SimulationConfig::new(2, 1)).unwrap();
        let second = Simulation::new(SimulationConfig::new(2, 1)).unwrap();

        first.context().stats.record(5);
        assert!(second.context().stats.snapshot().waits.is_empty());
        assert!(!Arc::ptr_eq(&first.context().pool, &second.context().pool));
        assert_ne!(first.context().run_id, second.context().run_id);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_with_no_customers() {
        let outcome = Simulation::new(SimulationConfig::new(3, 0))
            .unwrap()
            .run_detailed()
            .await
            .unwrap();

        assert_eq!(outcome.report.served, 0);
        assert_eq!(outcome.report.mean_wait, None);
        assert!(outcome.customers.is_empty());
        assert_eq!(outcome.final_status, PoolStatus { occupied: 0, capacity: 3 });
    }
}
