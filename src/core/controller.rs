//! Capacity controller: opens and closes counters on command while customers
//! are being served.
//!
//! Commands arrive over an `mpsc` channel from whatever drives the simulation
//! (stdin in the binary, direct sends in tests). The loop stops when the
//! launcher fires the one-shot stop signal, checked between commands.

use std::str::FromStr;
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use super::{CapacityPool, ResizeOutcome, SimulationError};

/// Default depth of the command channel.
pub const DEFAULT_COMMAND_QUEUE: usize = 32;

/// A capacity change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Open one more counter.
    Increase,
    /// Close one counter once it is idle.
    Decrease,
}

impl FromStr for Command {
    type Err = String;

    /// Accepts the menu numbers `1`/`2`, `+`/`-`, or the words
    /// `increase`/`decrease` (optionally followed by `capacity`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let word = normalized
            .strip_suffix("capacity")
            .map_or(normalized.as_str(), str::trim_end);
        match word {
            "1" | "+" | "increase" | "inc" => Ok(Self::Increase),
            "2" | "-" | "decrease" | "dec" => Ok(Self::Decrease),
            _ => Err(format!("unrecognized command `{}`", s.trim())),
        }
    }
}

/// Handle for sending commands to a running controller.
#[derive(Debug, Clone)]
pub struct CommandSender {
    tx: mpsc::Sender<Command>,
}

impl CommandSender {
    /// Send a command, waiting if the queue is full.
    pub async fn send(&self, command: Command) -> Result<(), SimulationError> {
        self.tx
            .send(command)
            .await
            .map_err(|_| SimulationError::ControllerClosed)
    }

    /// Blocking variant for plain threads (such as a stdin reader).
    ///
    /// Must not be called from within an async context.
    pub fn blocking_send(&self, command: Command) -> Result<(), SimulationError> {
        self.tx
            .blocking_send(command)
            .map_err(|_| SimulationError::ControllerClosed)
    }

    /// Parse a raw input line and forward it from a plain thread.
    ///
    /// Unrecognized input is dropped and reported as `Ok(false)`.
    pub fn forward_line(&self, line: &str) -> Result<bool, SimulationError> {
        match line.parse::<Command>() {
            Ok(command) => self.blocking_send(command).map(|()| true),
            Err(reason) => {
                tracing::trace!("ignoring input: {}", reason);
                Ok(false)
            }
        }
    }

    /// Whether the controller has stopped receiving.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Tally of what the controller did during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControllerSummary {
    /// Commands that changed the capacity.
    pub applied: u32,
    /// Commands refused because a bound was reached.
    pub rejected: u32,
}

/// Control loop resizing a [`CapacityPool`].
pub struct CapacityController {
    pool: Arc<CapacityPool>,
    rx: mpsc::Receiver<Command>,
}

impl CapacityController {
    /// Create a controller and the handle that feeds it.
    pub fn new(pool: Arc<CapacityPool>, queue_capacity: usize) -> (Self, CommandSender) {
        let (tx, rx) = mpsc::channel(queue_capacity.max(1));
        (Self { pool, rx }, CommandSender { tx })
    }

    /// Apply one command to the pool.
    pub async fn apply(&self, command: Command) -> ResizeOutcome {
        tracing::debug!("controller applying {:?}", command);
        match command {
            Command::Increase => self.pool.grow().await,
            Command::Decrease => self.pool.shrink().await,
        }
    }

    /// Process commands until `stop` fires (or its sender is dropped).
    ///
    /// Pending commands are drained before the stop signal is honored.
    pub async fn run(mut self, mut stop: oneshot::Receiver<()>) -> ControllerSummary {
        let mut summary = ControllerSummary::default();
        let mut open = true;

        loop {
            tokio::select! {
                biased;

                command = self.rx.recv(), if open => match command {
                    Some(command) => {
                        if self.apply(command).await.changed() {
                            summary.applied += 1;
                        } else {
                            summary.rejected += 1;
                        }
                    }
                    None => {
                        tracing::debug!("command channel closed, waiting for stop");
                        open = false;
                    }
                },
                _ = &mut stop => break,
            }
        }

        tracing::info!(
            "capacity controller stopped ({} applied, {} rejected, {} counters open)",
            summary.applied,
            summary.rejected,
            self.pool.capacity()
        );
        summary
    }
}
