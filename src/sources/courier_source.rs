use super::Catalog;
use crate::clients::KitchenClient;
use crate::kitchen_actor::KitchenError;
use crate::manager::PickupOutcome;
use rand::rngs::StdRng;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Uniform delay in `[min_secs, max_secs]`.
pub fn courier_delay<R: Rng + ?Sized>(rng: &mut R, min_secs: f64, max_secs: f64) -> Duration {
    let secs = if min_secs < max_secs {
        rng.gen_range(min_secs..=max_secs)
    } else {
        min_secs
    };
    Duration::try_from_secs_f64(secs).unwrap_or_default()
}

/// Sends couriers at uniformly random intervals.
///
/// Each courier asks for the temperature of a random catalog entry, so the
/// courier mix follows the order mix.
pub struct CourierSource {
    client: KitchenClient,
    catalog: Arc<Catalog>,
    min_secs: f64,
    max_secs: f64,
    rng: StdRng,
}

impl CourierSource {
    pub fn new(
        client: KitchenClient,
        catalog: Arc<Catalog>,
        min_secs: f64,
        max_secs: f64,
        rng: StdRng,
    ) -> Self {
        Self {
            client,
            catalog,
            min_secs,
            max_secs,
            rng,
        }
    }

    /// Runs until shutdown is signalled or the kitchen is gone. Returns the
    /// number of couriers dispatched.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) -> u64 {
        info!(min_secs = self.min_secs, max_secs = self.max_secs, "Courier source started");
        let mut dispatched = 0;
        while !*shutdown.borrow() {
            let delay = courier_delay(&mut self.rng, self.min_secs, self.max_secs);
            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                _ = shutdown.changed() => break,
            }

            let temperature = self.catalog.sample(&mut self.rng).temperature;
            dispatched += 1;
            match self.client.dispatch_courier(temperature).await {
                Ok(PickupOutcome::Delivered(status)) => {
                    info!(order_id = %status.id, value = status.value, "Delivered")
                }
                Ok(PickupOutcome::Wasted(wasted)) => {
                    info!(order_id = %wasted.status.id, "Courier found an expired order")
                }
                Ok(PickupOutcome::NoOrder(temperature)) => {
                    debug!(%temperature, "Courier left empty-handed")
                }
                Err(KitchenError::ActorClosed | KitchenError::ActorDropped) => {
                    warn!("Kitchen unavailable, stopping courier source");
                    break;
                }
                Err(e) => warn!(error = %e, "Pickup failed"),
            }
        }
        info!(dispatched, "Courier source stopped");
        dispatched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kitchen_actor::mock::{create_mock_client, expect_pickup};
    use crate::model::{OrderCreate, Temperature};
    use rand::SeedableRng;
    use tokio::time::Instant;

    fn frozen_catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::new(vec![OrderCreate {
                name: "Popsicle".to_string(),
                temperature: Temperature::Frozen,
                shelf_life: 345,
                decay_rate: 0.75,
            }])
            .unwrap(),
        )
    }

    #[test]
    fn test_delay_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..1_000 {
            let delay = courier_delay(&mut rng, 2.0, 8.0);
            assert!(delay >= Duration::from_secs(2) && delay <= Duration::from_secs(8));
        }
        assert_eq!(courier_delay(&mut rng, 3.0, 3.0), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispatches_catalog_temperatures_after_delay() {
        let (client, mut receiver) = create_mock_client(4);
        let (stop, shutdown) = watch::channel(false);
        let source = CourierSource::new(client, frozen_catalog(), 2.0, 8.0, StdRng::seed_from_u64(8));
        let start = Instant::now();
        let handle = tokio::spawn(source.run(shutdown));

        let (temperature, responder) = expect_pickup(&mut receiver)
            .await
            .expect("Expected Pickup request");
        let waited = start.elapsed();
        assert_eq!(temperature, Temperature::Frozen);
        assert!(waited >= Duration::from_secs(2));
        assert!(waited <= Duration::from_millis(8_001));
        responder.send(Ok(PickupOutcome::NoOrder(temperature))).unwrap();

        stop.send(true).unwrap();
        assert_eq!(handle.await.unwrap(), 1);
    }
}
