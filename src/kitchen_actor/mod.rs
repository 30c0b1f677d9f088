//! # Kitchen Actor
//!
//! The single consumer of every kitchen event. It owns the [`ShelfManager`] and
//! processes one [`KitchenRequest`] to completion before receiving the next, so
//! routing, aging, reclamation and pickup never interleave.
//!
//! ## Structure
//!
//! - [`message`] - [`KitchenRequest`] and the [`Response`] alias
//! - [`error`] - [`KitchenError`]
//! - [`mock`] - channel-backed clients for testing producers without an actor
//!
//! ## Usage
//!
//! ```rust
//! use kitchen_shelves::config::KitchenConfig;
//! use kitchen_shelves::kitchen_actor::KitchenActor;
//! use kitchen_shelves::manager::ShelfManager;
//! use kitchen_shelves::model::Temperature;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = KitchenConfig::default();
//!     let manager = ShelfManager::from_config(&config)?;
//!     let (actor, client) = KitchenActor::new(manager, config.channel_buffer);
//!     let handle = tokio::spawn(actor.run());
//!
//!     client.dispatch_courier(Temperature::Hot).await?;
//!     let counts = client.counts().await?;
//!     assert_eq!(counts.total(), 0);
//!
//!     drop(client);
//!     handle.await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod message;
pub mod mock;

pub use error::*;
pub use message::*;

use crate::clients::KitchenClient;
use crate::manager::ShelfManager;
use crate::model::KitchenStatus;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// Server half of the kitchen.
///
/// # Architecture Note
/// The actor owns the `ShelfManager` outright. No `Mutex` guards the shelves:
/// exclusive ownership inside one task is the critical section, and the
/// channel is the queue that serializes the three event streams.
///
/// After every mutating request a fresh [`KitchenStatus`] is published on a
/// `watch` channel, so status views always see a complete post-event snapshot.
pub struct KitchenActor {
    receiver: mpsc::Receiver<KitchenRequest>,
    manager: ShelfManager,
    status: watch::Sender<KitchenStatus>,
}

impl KitchenActor {
    /// Creates a new `KitchenActor` and its associated `KitchenClient`.
    ///
    /// `buffer_size` bounds the request channel. When it is full, client calls
    /// wait until there is space.
    pub fn new(manager: ShelfManager, buffer_size: usize) -> (Self, KitchenClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (status, _) = watch::channel(manager.snapshot());
        let actor = Self {
            receiver,
            manager,
            status,
        };
        (actor, KitchenClient::new(sender))
    }

    /// Subscribes to the snapshot published after each mutating request.
    pub fn subscribe(&self) -> watch::Receiver<KitchenStatus> {
        self.status.subscribe()
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// Requests already queued when the last client goes away are still
    /// processed, so shutdown never leaves a half-applied event behind.
    pub async fn run(mut self) {
        info!(
            capacity = self.manager.overflow().capacity(),
            "Kitchen actor started"
        );

        while let Some(request) = self.receiver.recv().await {
            let mutation = request.is_mutation();
            self.handle(request);
            if mutation {
                self.status.send_replace(self.manager.snapshot());
            }
        }

        let stats = self.manager.stats();
        info!(
            received = stats.received,
            delivered = stats.delivered,
            wasted = stats.wasted,
            held = self.manager.held(),
            "Kitchen actor shutdown"
        );
    }

    fn handle(&mut self, request: KitchenRequest) {
        match request {
            KitchenRequest::PlaceOrder { order, respond_to } => {
                debug!(?order, "PlaceOrder");
                let order_id = order.id;
                let result = self.manager.place_order(order).map_err(KitchenError::from);
                if let Err(e) = &result {
                    warn!(%order_id, error = %e, "PlaceOrder failed");
                }
                let _ = respond_to.send(result);
            }
            KitchenRequest::Pickup {
                temperature,
                respond_to,
            } => {
                debug!(%temperature, "Pickup");
                let result = self
                    .manager
                    .dispatch_courier(temperature)
                    .map_err(KitchenError::from);
                let _ = respond_to.send(result);
            }
            KitchenRequest::Heartbeat { delta, respond_to } => {
                debug!(?delta, "Heartbeat");
                let result = self.manager.on_heartbeat(delta).map_err(KitchenError::from);
                if let Err(e) = &result {
                    warn!(error = %e, "Heartbeat failed");
                }
                let _ = respond_to.send(result);
            }
            KitchenRequest::SetOverflowModifier {
                decay_modifier,
                respond_to,
            } => {
                debug!(decay_modifier, "SetOverflowModifier");
                let result = self
                    .manager
                    .set_overflow_decay_modifier(decay_modifier)
                    .map_err(KitchenError::from);
                let _ = respond_to.send(result);
            }
            KitchenRequest::Lookup { id, respond_to } => {
                let result = self.manager.lookup(id).map_err(KitchenError::from);
                debug!(%id, found = result.is_ok(), "Lookup");
                let _ = respond_to.send(result);
            }
            KitchenRequest::Snapshot { respond_to } => {
                let _ = respond_to.send(Ok(self.manager.snapshot()));
            }
            KitchenRequest::Counts { respond_to } => {
                let _ = respond_to.send(Ok(self.manager.counts()));
            }
        }
    }
}
