use crate::kitchen_actor::{KitchenError, KitchenRequest, Response};
use crate::manager::{AgingReport, ArrivalOutcome, PickupOutcome};
use crate::model::{KitchenStatus, Order, OrderId, OrderStatus, ShelfCounts, Temperature};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Client for interacting with the [`KitchenActor`](crate::kitchen_actor::KitchenActor).
///
/// Holds only the sending half of the request channel, so it is cheap to clone
/// and can be handed to every producer task. The actor shuts down once the last
/// clone is dropped.
#[derive(Clone)]
pub struct KitchenClient {
    sender: mpsc::Sender<KitchenRequest>,
}

impl KitchenClient {
    pub fn new(sender: mpsc::Sender<KitchenRequest>) -> Self {
        Self { sender }
    }

    /// Sends a request built around a fresh responder and waits for the answer.
    async fn request<T>(
        &self,
        build: impl FnOnce(Response<T>) -> KitchenRequest,
    ) -> Result<T, KitchenError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| KitchenError::ActorClosed)?;
        response.await.map_err(|_| KitchenError::ActorDropped)?
    }

    #[instrument(skip(self, order), fields(order_id = %order.id, temperature = %order.temperature))]
    pub async fn place_order(&self, order: Order) -> Result<ArrivalOutcome, KitchenError> {
        debug!("Sending request");
        self.request(|respond_to| KitchenRequest::PlaceOrder { order, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn dispatch_courier(
        &self,
        temperature: Temperature,
    ) -> Result<PickupOutcome, KitchenError> {
        debug!("Sending request");
        self.request(|respond_to| KitchenRequest::Pickup {
            temperature,
            respond_to,
        })
        .await
    }

    pub async fn heartbeat(&self, delta: Duration) -> Result<AgingReport, KitchenError> {
        self.request(|respond_to| KitchenRequest::Heartbeat { delta, respond_to })
            .await
    }

    pub async fn set_overflow_decay_modifier(&self, decay_modifier: f64) -> Result<(), KitchenError> {
        self.request(|respond_to| KitchenRequest::SetOverflowModifier {
            decay_modifier,
            respond_to,
        })
        .await
    }

    /// Current status of one held order, or `Shelf(NotFound)`.
    pub async fn lookup(&self, id: OrderId) -> Result<OrderStatus, KitchenError> {
        self.request(|respond_to| KitchenRequest::Lookup { id, respond_to })
            .await
    }

    pub async fn snapshot(&self) -> Result<KitchenStatus, KitchenError> {
        self.request(|respond_to| KitchenRequest::Snapshot { respond_to })
            .await
    }

    pub async fn counts(&self) -> Result<ShelfCounts, KitchenError> {
        self.request(|respond_to| KitchenRequest::Counts { respond_to })
            .await
    }
}
