use super::Catalog;
use crate::clients::KitchenClient;
use crate::kitchen_actor::KitchenError;
use crate::model::{Order, OrderId};
use rand::rngs::StdRng;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Samples the gap, in seconds, before the next arrival of a Poisson process with
/// `rate` events per second.
pub fn exponential_gap<R: Rng + ?Sized>(rng: &mut R, rate: f64) -> f64 {
    let u: f64 = rng.gen();
    -(1.0 - u).ln() / rate
}

/// Running statistics over the sampled inter-arrival gaps.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ArrivalStats {
    pub samples: u64,
    pub mean_gap_secs: f64,
    pub orders_sent: u64,
}

impl ArrivalStats {
    pub fn record_gap(&mut self, gap_secs: f64) {
        self.samples += 1;
        self.mean_gap_secs += (gap_secs - self.mean_gap_secs) / self.samples as f64;
    }
}

/// Emits catalog orders at exponentially distributed intervals.
///
/// Ids are sequential from `order_1`. Arrival timestamps are milliseconds since
/// the source was created, measured on the tokio clock.
pub struct OrderSource {
    client: KitchenClient,
    catalog: Arc<Catalog>,
    arrival_rate: f64,
    rng: StdRng,
    next_id: u64,
    started: Instant,
    stats: ArrivalStats,
}

impl OrderSource {
    pub fn new(client: KitchenClient, catalog: Arc<Catalog>, arrival_rate: f64, rng: StdRng) -> Self {
        Self {
            client,
            catalog,
            arrival_rate,
            rng,
            next_id: 0,
            started: Instant::now(),
            stats: ArrivalStats::default(),
        }
    }

    /// Runs until shutdown is signalled or the kitchen is gone, then returns the
    /// arrival statistics.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) -> ArrivalStats {
        info!(rate = self.arrival_rate, "Order source started");
        while !*shutdown.borrow() {
            let gap = exponential_gap(&mut self.rng, self.arrival_rate);
            self.stats.record_gap(gap);
            debug!(
                gap_secs = gap,
                samples = self.stats.samples,
                mean_gap_secs = self.stats.mean_gap_secs,
                "Next arrival"
            );

            tokio::select! {
                _ = tokio::time::sleep(Duration::try_from_secs_f64(gap).unwrap_or_default()) => {}
                _ = shutdown.changed() => break,
            }

            match self.emit().await {
                Ok(()) => {}
                Err(KitchenError::ActorClosed | KitchenError::ActorDropped) => {
                    warn!("Kitchen unavailable, stopping order source");
                    break;
                }
                Err(e) => warn!(error = %e, "Order arrival failed"),
            }
        }
        info!(
            orders = self.stats.orders_sent,
            mean_gap_secs = self.stats.mean_gap_secs,
            "Order source stopped"
        );
        self.stats
    }

    async fn emit(&mut self) -> Result<(), KitchenError> {
        let params = self.catalog.sample(&mut self.rng).clone();
        self.next_id += 1;
        let id = OrderId(self.next_id);
        let arrived_at_ms = u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX);

        let order = match Order::new(id, arrived_at_ms, params) {
            Ok(order) => order,
            Err(e) => {
                warn!(order_id = %id, error = %e, "Skipping invalid order sample");
                return Ok(());
            }
        };

        let outcome = self.client.place_order(order).await?;
        self.stats.orders_sent += 1;
        if outcome.is_rejected() {
            info!(order_id = %id, "Order rejected, no shelf space");
        } else {
            debug!(order_id = %id, ?outcome, "Order placed");
        }
        Ok(())
    }
}
