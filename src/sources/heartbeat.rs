use crate::clients::KitchenClient;
use crate::kitchen_actor::KitchenError;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// Ages the kitchen by a fixed `period` once per `period`.
pub struct HeartbeatSource {
    client: KitchenClient,
    period: Duration,
}

impl HeartbeatSource {
    pub fn new(client: KitchenClient, period: Duration) -> Self {
        Self { client, period }
    }

    /// Runs until shutdown is signalled or the kitchen is gone. Returns the
    /// number of ticks delivered.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) -> u64 {
        info!(period = ?self.period, "Heartbeat started");
        let mut interval = tokio::time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        interval.tick().await;

        let mut ticks = 0;
        while !*shutdown.borrow() {
            tokio::select! {
                _ = interval.tick() => {}
                _ = shutdown.changed() => break,
            }

            match self.client.heartbeat(self.period).await {
                Ok(report) => {
                    ticks += 1;
                    debug!(
                        wasted = report.wasted.len(),
                        relocated = report.relocated.len(),
                        reclaimed = report.reclaimed.len(),
                        "Heartbeat"
                    );
                }
                Err(KitchenError::ActorClosed | KitchenError::ActorDropped) => {
                    warn!("Kitchen unavailable, stopping heartbeat");
                    break;
                }
                Err(e) => warn!(error = %e, "Heartbeat failed"),
            }
        }
        info!(ticks, "Heartbeat stopped");
        ticks
    }
}
