//! Resizable capacity pool bounding how many customers are served at once.
//!
//! Admission is a `tokio::sync::Semaphore` whose permit count tracks the number
//! of open counters, so opening or closing a counter is just a permit count
//! change. Occupancy and capacity are kept together behind one
//! `parking_lot::Mutex` so every status read is a consistent pair.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::sync::{Semaphore, SemaphorePermit};

/// Upper bound on open counters.
pub const MAX_SERVERS: u32 = 10;
/// Lower bound on open counters.
pub const MIN_SERVERS: u32 = 1;

/// Consistent snapshot of pool occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolStatus {
    /// Customers currently being served.
    pub occupied: u32,
    /// Counters currently open.
    pub capacity: u32,
}

/// Result of a grow or shrink request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeOutcome {
    /// A counter was opened; carries the new capacity.
    Grown(u32),
    /// A counter was closed; carries the new capacity.
    Shrunk(u32),
    /// Already at `MAX_SERVERS`, nothing changed.
    AtMaximum,
    /// Already at `MIN_SERVERS`, nothing changed.
    AtMinimum,
}

impl ResizeOutcome {
    /// Whether the request changed the capacity.
    pub const fn changed(self) -> bool {
        matches!(self, Self::Grown(_) | Self::Shrunk(_))
    }
}

struct PoolState {
    capacity: u32,
    occupied: u32,
}

/// Counting pool of service slots with live resizing.
///
/// Invariants:
/// - `occupied <= capacity` under the state lock at all times
/// - `MIN_SERVERS <= capacity <= MAX_SERVERS`
/// - resizes are serialized by `resize`; admissions never wait on it
pub struct CapacityPool {
    permits: Semaphore,
    state: Mutex<PoolState>,
    /// Held across a whole grow/shrink, including a shrink waiting for an idle slot.
    resize: tokio::sync::Mutex<()>,
}

impl CapacityPool {
    /// Create a pool with `capacity` open counters, clamped to the allowed range.
    pub fn new(capacity: u32) -> Self {
        let capacity = capacity.clamp(MIN_SERVERS, MAX_SERVERS);
        Self {
            permits: Semaphore::new(capacity as usize),
            state: Mutex::new(PoolState {
                capacity,
                occupied: 0,
            }),
            resize: tokio::sync::Mutex::new(()),
        }
    }

    /// Wait for a free counter and take it.
    ///
    /// Never times out. The returned [`Slot`] gives the counter back when it is
    /// released or dropped.
    pub async fn admit(&self) -> Slot<'_> {
        let permit = match self.permits.acquire().await {
            Ok(permit) => permit,
            // The pool never closes its semaphore.
            Err(_) => unreachable!("capacity pool semaphore closed"),
        };
        self.state.lock().occupied += 1;
        Slot {
            pool: self,
            permit: Some(permit),
        }
    }

    /// Open one more counter, unless already at `MAX_SERVERS`.
    pub async fn grow(&self) -> ResizeOutcome {
        let _resize = self.resize.lock().await;
        let capacity = {
            let mut state = self.state.lock();
            if state.capacity >= MAX_SERVERS {
                None
            } else {
                // Capacity goes up before the permit so occupancy never overtakes it.
                state.capacity += 1;
                Some(state.capacity)
            }
        };

        match capacity {
            Some(capacity) => {
                self.permits.add_permits(1);
                tracing::info!("additional counter opened, counters now: {}", capacity);
                ResizeOutcome::Grown(capacity)
            }
            None => {
                tracing::warn!("maximum number of counters ({}) already reached", MAX_SERVERS);
                ResizeOutcome::AtMaximum
            }
        }
    }

    /// Close one counter, unless already at `MIN_SERVERS`.
    ///
    /// The counter is retired by taking a permit and never returning it, so this
    /// waits until some counter is idle. No customer in service is evicted.
    pub async fn shrink(&self) -> ResizeOutcome {
        let _resize = self.resize.lock().await;
        if self.state.lock().capacity <= MIN_SERVERS {
            tracing::warn!(
                "cannot close another counter, at least {} must stay open",
                MIN_SERVERS
            );
            return ResizeOutcome::AtMinimum;
        }

        tracing::debug!("waiting for an idle counter to close");
        let permit = match self.permits.acquire().await {
            Ok(permit) => permit,
            Err(_) => unreachable!("capacity pool semaphore closed"),
        };
        permit.forget();

        let capacity = {
            let mut state = self.state.lock();
            state.capacity -= 1;
            state.capacity
        };
        tracing::info!("a counter was closed, counters now: {}", capacity);
        ResizeOutcome::Shrunk(capacity)
    }

    /// Current occupancy and capacity, read together.
    pub fn status(&self) -> PoolStatus {
        let state = self.state.lock();
        PoolStatus {
            occupied: state.occupied,
            capacity: state.capacity,
        }
    }

    /// Current number of open counters.
    pub fn capacity(&self) -> u32 {
        self.state.lock().capacity
    }

    fn give_back(&self, permit: SemaphorePermit<'_>) {
        self.state.lock().occupied -= 1;
        drop(permit);
    }
}

/// One occupied counter. Returned by [`CapacityPool::admit`].
#[must_use = "dropping a slot releases the counter immediately"]
pub struct Slot<'a> {
    pool: &'a CapacityPool,
    permit: Option<SemaphorePermit<'a>>,
}

impl Slot<'_> {
    /// Give the counter back to the pool.
    pub fn release(mut self) {
        if let Some(permit) = self.permit.take() {
            self.pool.give_back(permit);
        }
    }
}

impl Drop for Slot<'_> {
    fn drop(&mut self) {
        if let Some(permit) = self.permit.take() {
            self.pool.give_back(permit);
        }
    }
}
