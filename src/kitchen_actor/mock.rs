//! # Mock Kitchen
//!
//! Producers only ever talk to a [`KitchenClient`]. To test one without spinning up
//! a [`KitchenActor`](super::KitchenActor), hand it a client whose channel ends in a
//! receiver you control, then assert on the requests that arrive and answer them
//! yourself.
//!
//! ```rust
//! use kitchen_shelves::kitchen_actor::mock::{create_mock_client, expect_pickup};
//! use kitchen_shelves::manager::PickupOutcome;
//! use kitchen_shelves::model::Temperature;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut receiver) = create_mock_client(4);
//!
//!     let courier = tokio::spawn(async move { client.dispatch_courier(Temperature::Cold).await });
//!
//!     let (temperature, responder) = expect_pickup(&mut receiver).await.unwrap();
//!     assert_eq!(temperature, Temperature::Cold);
//!     responder.send(Ok(PickupOutcome::NoOrder(temperature))).unwrap();
//!
//!     assert!(courier.await.unwrap().is_ok());
//! }
//! ```

use super::{KitchenRequest, Response};
use crate::clients::KitchenClient;
use crate::manager::{AgingReport, ArrivalOutcome, PickupOutcome};
use crate::model::{Order, Temperature};
use std::time::Duration;
use tokio::sync::mpsc;

/// Creates a client and the receiver its requests land on.
pub fn create_mock_client(buffer_size: usize) -> (KitchenClient, mpsc::Receiver<KitchenRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (KitchenClient::new(sender), receiver)
}

/// Helper to verify that the next message is a PlaceOrder request
pub async fn expect_place_order(
    receiver: &mut mpsc::Receiver<KitchenRequest>,
) -> Option<(Order, Response<ArrivalOutcome>)> {
    match receiver.recv().await {
        Some(KitchenRequest::PlaceOrder { order, respond_to }) => Some((order, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Pickup request
pub async fn expect_pickup(
    receiver: &mut mpsc::Receiver<KitchenRequest>,
) -> Option<(Temperature, Response<PickupOutcome>)> {
    match receiver.recv().await {
        Some(KitchenRequest::Pickup {
            temperature,
            respond_to,
        }) => Some((temperature, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Heartbeat request
pub async fn expect_heartbeat(
    receiver: &mut mpsc::Receiver<KitchenRequest>,
) -> Option<(Duration, Response<AgingReport>)> {
    match receiver.recv().await {
        Some(KitchenRequest::Heartbeat { delta, respond_to }) => Some((delta, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kitchen_actor::KitchenError;
    use crate::model::{OrderCreate, OrderId};

    #[tokio::test]
    async fn test_mock_client_place_order() {
        let (client, mut receiver) = create_mock_client(4);

        let arrival = tokio::spawn(async move {
            let params = OrderCreate {
                name: "Kale Salad".to_string(),
                temperature: Temperature::Cold,
                shelf_life: 250,
                decay_rate: 0.3,
            };
            let order = Order::new(OrderId(1), 0, params).unwrap();
            client.place_order(order).await
        });

        let (order, responder) = expect_place_order(&mut receiver)
            .await
            .expect("Expected PlaceOrder request");
        assert_eq!(order.name, "Kale Salad");
        responder.send(Err(KitchenError::ActorDropped)).unwrap();

        let result = arrival.await.unwrap();
        assert!(matches!(result, Err(KitchenError::ActorDropped)));
    }

    #[tokio::test]
    async fn test_mock_client_wrong_request() {
        let (client, mut receiver) = create_mock_client(4);
        tokio::spawn(async move { client.counts().await });
        assert!(expect_heartbeat(&mut receiver).await.is_none());
    }
}
