use crate::clients::{watch_status, KitchenClient, LogStatusView, StatusView};
use crate::config::{ConfigError, KitchenConfig};
use crate::kitchen_actor::KitchenActor;
use crate::manager::ShelfManager;
use crate::model::KitchenStatus;
use crate::sources::{producer_rng, Catalog, CourierSource, HeartbeatSource, OrderSource};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info};

const ORDER_STREAM: u64 = 0;
const COURIER_STREAM: u64 = 1;

/// The running simulation.
///
/// `KitchenSystem` is responsible for:
/// - **Lifecycle Management**: starting the kitchen actor, the three producers and
///   the status view, and stopping them again
/// - **Dependency Wiring**: every producer gets its own clone of the
///   [`KitchenClient`] and a receiver for the shutdown signal
///
/// # Example
///
/// ```ignore
/// let system = KitchenSystem::start(&config, catalog)?;
/// let counts = system.client().counts().await?;
/// system.shutdown().await?;
/// ```
pub struct KitchenSystem {
    client: KitchenClient,
    status: watch::Receiver<KitchenStatus>,
    stop: watch::Sender<bool>,
    producers: Vec<JoinHandle<()>>,
    actor: JoinHandle<()>,
    view: JoinHandle<()>,
}

impl KitchenSystem {
    /// Starts the simulation with a [`LogStatusView`].
    pub fn start(config: &KitchenConfig, catalog: Catalog) -> Result<Self, ConfigError> {
        Self::start_with_view(config, catalog, LogStatusView)
    }

    /// Starts the simulation, rendering every status update with `view`.
    ///
    /// # Errors
    /// Fails only if `config` does not validate. Nothing is spawned in that case.
    pub fn start_with_view<V>(
        config: &KitchenConfig,
        catalog: Catalog,
        view: V,
    ) -> Result<Self, ConfigError>
    where
        V: StatusView + 'static,
    {
        let manager = ShelfManager::from_config(config)?;

        // 1. Kitchen actor and its status feed
        let (actor, client) = KitchenActor::new(manager, config.channel_buffer);
        let status = actor.subscribe();
        let view = tokio::spawn(watch_status(view, actor.subscribe()));
        let actor = tokio::spawn(actor.run());

        // 2. Producers, each with its own client clone
        let (stop, shutdown) = watch::channel(false);
        let catalog = Arc::new(catalog);
        let schedule = &config.schedule;

        let orders = OrderSource::new(
            client.clone(),
            Arc::clone(&catalog),
            schedule.arrival_rate,
            producer_rng(config.seed, ORDER_STREAM),
        );
        let couriers = CourierSource::new(
            client.clone(),
            catalog,
            schedule.courier_min_secs,
            schedule.courier_max_secs,
            producer_rng(config.seed, COURIER_STREAM),
        );
        let heartbeat = HeartbeatSource::new(client.clone(), schedule.heartbeat());

        let producers = vec![
            tokio::spawn({
                let shutdown = shutdown.clone();
                async move {
                    orders.run(shutdown).await;
                }
            }),
            tokio::spawn({
                let shutdown = shutdown.clone();
                async move {
                    couriers.run(shutdown).await;
                }
            }),
            tokio::spawn(async move {
                heartbeat.run(shutdown).await;
            }),
        ];

        info!(seed = ?config.seed, "Kitchen started");
        Ok(Self {
            client,
            status,
            stop,
            producers,
            actor,
            view,
        })
    }

    /// Client for talking to the kitchen actor directly.
    ///
    /// The borrow ends before [`shutdown`](Self::shutdown) can be called. A clone
    /// taken from it keeps the actor alive, so it must be dropped first.
    pub fn client(&self) -> &KitchenClient {
        &self.client
    }

    /// The most recent snapshot published by the kitchen actor.
    pub fn status(&self) -> KitchenStatus {
        self.status.borrow().clone()
    }

    /// A fresh receiver for status updates.
    pub fn subscribe(&self) -> watch::Receiver<KitchenStatus> {
        self.status.clone()
    }

    /// Gracefully shuts down the entire simulation.
    ///
    /// # Shutdown Process
    ///
    /// 1. The stop signal cancels all three producer loops; an event already
    ///    in flight is still answered by the actor.
    /// 2. Once the producers are joined, the system's own client is dropped. The
    ///    actor drains its queue and exits once no `KitchenClient` is left, so
    ///    any clone taken from [`client`](Self::client) must be dropped before
    ///    calling this, or shutdown waits for it.
    /// 3. The actor's exit closes the status feed, which ends the view task.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if every task finished cleanly
    /// - `Err(String)` if any task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down kitchen...");

        // Producers ignore a failed send; they only need the value to change.
        let _ = self.stop.send(true);
        for handle in self.producers {
            join("Producer", handle).await?;
        }

        drop(self.client);
        join("Kitchen actor", self.actor).await?;
        join("Status view", self.view).await?;

        info!("Kitchen shutdown complete.");
        Ok(())
    }
}

async fn join(task: &str, handle: JoinHandle<()>) -> Result<(), String> {
    handle.await.map_err(|e| {
        error!("{} task failed: {:?}", task, e);
        format!("{} task failed: {:?}", task, e)
    })
}
