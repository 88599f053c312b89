//! # Billing Monitor
//!
//! Keeps the displayed duration and total of an open movement current.
//!
//! Two repeating timers run per monitored movement, deliberately
//! decoupled so the visible clock never waits on the network:
//!
//! - **clock tick** (default 1 s): recomputes the displayed permanence
//!   and payable total from already-known values. No I/O.
//! - **fee tick** (default 10 s): re-fetches the movement record, and —
//!   while the movement is still open — sends the formatted duration to
//!   the permanence-pricing endpoint, replacing the current fee.
//!
//! A failed quote retains the previous fee and logs a warning; the
//! duration display alone stays useful, so quote failures are never
//! surfaced as blocking errors. The loop ends as soon as the movement
//! carries an exit timestamp, the movement record disappears, or a
//! shutdown signal arrives (view teardown). No retry or backoff: the
//! next scheduled tick is the only retry there is.

use chrono::{DateTime, Utc};
use tokio::sync::{broadcast, watch};
use tokio::time::interval;
use tracing::{debug, warn};

use suiteops_client::movements::Movement;
use suiteops_client::PmsClient;
use suiteops_core::{MovementId, Permanence};

use crate::calc::Charges;

/// One recomputation of an open movement's displayed billing state.
#[derive(Debug, Clone, PartialEq)]
pub struct BillingSnapshot {
    /// The monitored movement.
    pub movement_id: MovementId,
    /// Elapsed permanence, frozen at the exit timestamp once closed.
    pub permanence: Permanence,
    /// Latest successfully quoted permanence fee, if any yet.
    pub suite_fee: Option<f64>,
    /// Payable total for the current operands.
    pub payable: f64,
    /// Whether the movement now carries an exit timestamp.
    pub closed: bool,
}

/// Timer cadences for the monitor.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Cadence of the local display tick.
    pub clock_tick: std::time::Duration,
    /// Cadence of the network fee-refresh tick.
    pub fee_tick: std::time::Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            clock_tick: std::time::Duration::from_secs(1),
            fee_tick: std::time::Duration::from_secs(10),
        }
    }
}

/// Billing monitor for one movement.
#[derive(Debug)]
pub struct BillingMonitor {
    client: PmsClient,
    movement: Movement,
    suite_fee: Option<f64>,
    config: MonitorConfig,
}

impl BillingMonitor {
    /// Monitor a movement with the default cadences.
    pub fn new(client: PmsClient, movement: Movement) -> Self {
        Self::with_config(client, movement, MonitorConfig::default())
    }

    /// Monitor a movement with explicit cadences.
    pub fn with_config(client: PmsClient, movement: Movement, config: MonitorConfig) -> Self {
        Self {
            client,
            movement,
            suite_fee: None,
            config,
        }
    }

    /// The movement being monitored.
    pub fn movement(&self) -> &Movement {
        &self.movement
    }

    /// Recompute the displayed state from already-known values. No I/O.
    pub fn snapshot(&self, now: DateTime<Utc>) -> BillingSnapshot {
        let charges = Charges::from_movement(&self.movement, self.suite_fee);
        BillingSnapshot {
            movement_id: self.movement.id,
            permanence: self.movement.permanence_at(now),
            suite_fee: self.suite_fee,
            payable: charges.payable(),
            closed: !self.movement.is_open(),
        }
    }

    /// Quote the fee for the current duration and fold it in.
    ///
    /// On failure the previous fee is retained; the total must not
    /// flicker to zero because one poll was lost.
    pub async fn refresh_fee(&mut self, now: DateTime<Utc>) -> BillingSnapshot {
        let permanence = self.movement.permanence_at(now);
        match self
            .client
            .movements()
            .permanence_quote(self.movement.suite_id, &permanence)
            .await
        {
            Ok(fee) => {
                debug!(movement = %self.movement.id, %permanence, fee, "permanence fee quoted");
                self.suite_fee = Some(fee);
            }
            Err(err) => {
                warn!(
                    movement = %self.movement.id,
                    error = %err,
                    "permanence quote failed; keeping previous fee"
                );
            }
        }
        self.snapshot(now)
    }

    /// Re-fetch the movement record. Returns `true` when polling must
    /// stop: the movement gained an exit timestamp or no longer exists.
    /// A failed fetch keeps the last known record.
    pub async fn reload_movement(&mut self) -> bool {
        match self.client.movements().movement(self.movement.id).await {
            Ok(Some(updated)) => {
                self.movement = updated;
                !self.movement.is_open()
            }
            Ok(None) => {
                warn!(movement = %self.movement.id, "movement record vanished; stopping monitor");
                true
            }
            Err(err) => {
                warn!(
                    movement = %self.movement.id,
                    error = %err,
                    "movement reload failed; keeping last known record"
                );
                !self.movement.is_open()
            }
        }
    }

    /// Run the monitor loop, publishing snapshots until the movement
    /// closes, every receiver is gone, or `shutdown` fires.
    ///
    /// Both timers fire immediately on start, so the first duration and
    /// the first fee quote appear without waiting a full cadence. A
    /// movement that is already closed produces one frozen snapshot and
    /// returns without polling.
    pub async fn run(
        mut self,
        snapshots: watch::Sender<BillingSnapshot>,
        mut shutdown: broadcast::Receiver<()>,
    ) {
        if !self.movement.is_open() {
            let _ = snapshots.send(self.snapshot(Utc::now()));
            debug!(movement = %self.movement.id, "movement already closed; nothing to monitor");
            return;
        }

        let mut clock = interval(self.config.clock_tick);
        let mut fee = interval(self.config.fee_tick);

        loop {
            tokio::select! {
                _ = clock.tick() => {
                    if snapshots.send(self.snapshot(Utc::now())).is_err() {
                        break;
                    }
                }
                _ = fee.tick() => {
                    let stopped = self.reload_movement().await;
                    let now = Utc::now();
                    if stopped {
                        let _ = snapshots.send(self.snapshot(now));
                        debug!(movement = %self.movement.id, "movement closed; stopping monitor");
                        break;
                    }
                    if snapshots.send(self.refresh_fee(now).await).is_err() {
                        break;
                    }
                }
                _ = shutdown.recv() => {
                    debug!(movement = %self.movement.id, "shutdown received; stopping monitor");
                    break;
                }
            }
        }
    }
}
