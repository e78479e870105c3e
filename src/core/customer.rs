//! Lifecycle of a single customer: arrive, queue, get served, leave.

use serde::{Deserialize, Serialize};
use tokio::time::Instant;

use super::SimulationContext;

/// Sequential customer identifier, starting at 0.
pub type CustomerId = u32;

/// What happened to one customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Customer identifier.
    pub id: CustomerId,
    /// Units spent queueing, truncated.
    pub wait_units: u64,
    /// Units spent at the counter.
    pub service_units: u64,
    /// Whether the wait exceeded the threshold.
    pub dissatisfied: bool,
}

/// Run one customer to completion.
///
/// Blocks on the pool until admitted, reports the wait into the collector,
/// holds the counter for a sampled service time, then releases it.
pub async fn serve_customer(id: CustomerId, ctx: SimulationContext) -> CustomerRecord {
    let arrived_at = Instant::now();
    tracing::info!("customer {} is waiting for a counter", id);

    let slot = ctx.pool.admit().await;
    let admitted_at = Instant::now();
    let status = ctx.pool.status();
    tracing::info!(
        "customer {} is being served, counters busy: {} / {}",
        id,
        status.occupied,
        status.capacity
    );

    let wait_units = ctx.to_units(admitted_at.duration_since(arrived_at));
    ctx.stats.record(wait_units);

    let dissatisfied = wait_units > ctx.dissatisfaction_threshold_units;
    if dissatisfied {
        ctx.stats.mark_dissatisfied();
        tracing::info!(
            "customer {} is dissatisfied (waited {} seconds)",
            id,
            wait_units
        );
    }

    let service_units = ctx.service.sample();
    tokio::time::sleep(ctx.units(service_units)).await;

    tracing::info!(
        "customer {} finished (service took {} seconds) and freed the counter",
        id,
        service_units
    );
    slot.release();

    CustomerRecord {
        id,
        wait_units,
        service_units,
        dissatisfied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::core::FixedServiceTime;
    use std::sync::Arc;

    fn context(capacity: u32, service_units: u64) -> SimulationContext {
        SimulationContext::new(
            &SimulationConfig::new(capacity, 0),
            Arc::new(FixedServiceTime(service_units)),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_unblocked_customer_waits_zero() {
        let ctx = context(1, 7);
        let record = serve_customer(0, ctx.clone()).await;

        assert_eq!(record.wait_units, 0);
        assert_eq!(record.service_units, 7);
        assert!(!record.dissatisfied);
        assert_eq!(ctx.stats.snapshot().waits, vec![0]);
        assert_eq!(ctx.pool.status().occupied, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_at_threshold_is_not_dissatisfied() {
        let ctx = context(1, 6);
        let held = ctx.pool.admit().await;
        let customer = tokio::spawn(serve_customer(3, ctx.clone()));

        tokio::time::sleep(ctx.units(20)).await;
        held.release();

        let record = customer.await.expect("customer task");
        assert_eq!(record.wait_units, 20);
        assert!(!record.dissatisfied);
        assert_eq!(ctx.stats.snapshot().dissatisfied, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_above_threshold_is_dissatisfied_once() {
        let ctx = context(1, 6);
        let held = ctx.pool.admit().await;
        let customer = tokio::spawn(serve_customer(4, ctx.clone()));

        tokio::time::sleep(ctx.units(21)).await;
        held.release();

        let record = customer.await.expect("customer task");
        assert_eq!(record.wait_units, 21);
        assert!(record.dissatisfied);

        let snapshot = ctx.stats.snapshot();
        assert_eq!(snapshot.waits, vec![21]);
        assert_eq!(snapshot.dissatisfied, 1);
    }
}
