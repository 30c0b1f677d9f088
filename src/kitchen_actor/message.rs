//! # Kitchen Messages
//!
//! Requests sent from a [`KitchenClient`](crate::clients::KitchenClient) to the
//! [`KitchenActor`](super::KitchenActor). All three event streams (arrivals,
//! couriers, heartbeats) and every status read funnel into this one enum, so the
//! actor sees a single merged queue.

use super::KitchenError;
use crate::manager::{AgingReport, ArrivalOutcome, PickupOutcome};
use crate::model::{KitchenStatus, Order, OrderId, OrderStatus, ShelfCounts, Temperature};
use std::time::Duration;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, KitchenError>>;

#[derive(Debug)]
pub enum KitchenRequest {
    PlaceOrder {
        order: Order,
        respond_to: Response<ArrivalOutcome>,
    },
    Pickup {
        temperature: Temperature,
        respond_to: Response<PickupOutcome>,
    },
    Heartbeat {
        delta: Duration,
        respond_to: Response<AgingReport>,
    },
    SetOverflowModifier {
        decay_modifier: f64,
        respond_to: Response<()>,
    },
    Lookup {
        id: OrderId,
        respond_to: Response<OrderStatus>,
    },
    Snapshot {
        respond_to: Response<KitchenStatus>,
    },
    Counts {
        respond_to: Response<ShelfCounts>,
    },
}

impl KitchenRequest {
    /// Whether handling this request can change shelf contents.
    pub fn is_mutation(&self) -> bool {
        !matches!(
            self,
            KitchenRequest::Lookup { .. }
                | KitchenRequest::Snapshot { .. }
                | KitchenRequest::Counts { .. }
        )
    }
}
