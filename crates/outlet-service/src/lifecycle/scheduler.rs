//! Periodic order status sweep.

use crate::clients::OrderClient;
use crate::model::StatusChange;
use std::time::Duration;
use tokio::sync::{broadcast, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{error, info, warn};

const REPORT_BUFFER: usize = 16;

/// Outcome of one sweep, published to every subscriber.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepReport {
    /// 1 for the first sweep after start, then counting up.
    pub sequence: u64,
    /// Orders that moved during this sweep, in id order.
    pub changes: Vec<StatusChange>,
}

/// Background task that advances every order once per period.
///
/// The first sweep fires one full period after [`spawn`](Self::spawn). Slow sweeps push
/// the next tick back rather than firing a burst to catch up.
pub struct SweepScheduler {
    reports: broadcast::Sender<SweepReport>,
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl SweepScheduler {
    /// Starts sweeping. `period` must be non-zero.
    pub fn spawn(orders: OrderClient, period: Duration) -> Self {
        let (reports, _) = broadcast::channel(REPORT_BUFFER);
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();
        let publisher = reports.clone();

        let task = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            info!(period_secs = period.as_secs_f64(), "Sweep scheduler started");

            let mut sequence = 0u64;
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    _ = interval.tick() => {
                        sequence += 1;
                        sweep(&orders, sequence, &publisher).await;
                    }
                }
            }

            info!(sweeps = sequence, "Sweep scheduler stopped");
        });

        Self {
            reports,
            shutdown: Some(shutdown_tx),
            task,
        }
    }

    /// Receives every report published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<SweepReport> {
        self.reports.subscribe()
    }

    /// Stops the loop and waits for it. A sweep already running finishes first.
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Err(e) = self.task.await {
            error!(error = %e, "Sweep scheduler task failed");
        }
    }
}

async fn sweep(orders: &OrderClient, sequence: u64, publisher: &broadcast::Sender<SweepReport>) {
    match orders.advance_all().await {
        Ok(changes) => {
            for change in &changes {
                info!(
                    order_id = change.order_id.0,
                    from = %change.from,
                    to = %change.to,
                    "Order status changed"
                );
            }
            info!(sequence, changed = changes.len(), "Order statuses updated");
            // No subscribers is the normal case.
            let _ = publisher.send(SweepReport { sequence, changes });
        }
        Err(e) => warn!(sequence, error = %e, "Sweep failed"),
    }
}
