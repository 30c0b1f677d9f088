use kitchen_shelves::config::KitchenConfig;
use kitchen_shelves::kitchen_actor::{KitchenActor, KitchenError};
use kitchen_shelves::manager::{ArrivalOutcome, PickupOutcome, ShelfManager};
use kitchen_shelves::model::{Order, OrderCreate, OrderId, ShelfKind, Temperature};
use kitchen_shelves::shelf::ShelfError;
use std::time::Duration;

fn small_config() -> KitchenConfig {
    let mut config = KitchenConfig::default();
    config.shelves.hot_capacity = 1;
    config.shelves.cold_capacity = 1;
    config.shelves.frozen_capacity = 1;
    config.shelves.overflow_capacity = 1;
    config
}

fn order(id: u64, temperature: Temperature, shelf_life: u32, decay_rate: f64) -> Order {
    let params = OrderCreate {
        name: format!("Order {}", id),
        temperature,
        shelf_life,
        decay_rate,
    };
    Order::new(OrderId(id), id, params).unwrap()
}

#[tokio::test]
async fn test_spillover_and_rejection_through_actor() {
    let config = small_config();
    let (actor, client) = KitchenActor::new(ShelfManager::from_config(&config).unwrap(), 8);
    let handle = tokio::spawn(actor.run());

    let first = client.place_order(order(1, Temperature::Hot, 300, 0.5)).await.unwrap();
    assert_eq!(
        first,
        ArrivalOutcome::Shelved {
            order_id: OrderId(1),
            shelf: ShelfKind::Home(Temperature::Hot)
        }
    );

    let second = client.place_order(order(2, Temperature::Hot, 300, 0.5)).await.unwrap();
    assert_eq!(
        second,
        ArrivalOutcome::Displaced {
            order_id: OrderId(2),
            moved: OrderId(1)
        }
    );

    let third = client.place_order(order(3, Temperature::Hot, 300, 0.5)).await.unwrap();
    assert!(third.is_rejected());

    let counts = client.counts().await.unwrap();
    assert_eq!((counts.hot, counts.overflow), (1, 1));
    let stats = client.snapshot().await.unwrap().stats;
    assert_eq!((stats.received, stats.wasted, stats.rejected), (3, 1, 1));

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_heartbeat_expires_orders_through_actor() {
    let config = small_config();
    let (actor, client) = KitchenActor::new(ShelfManager::from_config(&config).unwrap(), 8);
    let handle = tokio::spawn(actor.run());

    client.place_order(order(1, Temperature::Cold, 10, 0.0)).await.unwrap();
    let report = client.heartbeat(Duration::from_secs(10)).await.unwrap();
    assert_eq!(report.wasted.len(), 1);

    let lookup = client.lookup(OrderId(1)).await;
    assert_eq!(lookup, Err(KitchenError::Shelf(ShelfError::NotFound(OrderId(1)))));

    let pickup = client.dispatch_courier(Temperature::Cold).await.unwrap();
    assert_eq!(pickup, PickupOutcome::NoOrder(Temperature::Cold));

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_status_published_after_mutation() {
    let config = KitchenConfig::default();
    let (actor, client) = KitchenActor::new(ShelfManager::from_config(&config).unwrap(), 8);
    let mut status = actor.subscribe();
    let handle = tokio::spawn(actor.run());

    client.place_order(order(1, Temperature::Frozen, 300, 0.5)).await.unwrap();
    status.changed().await.unwrap();
    assert_eq!(status.borrow_and_update().counts().frozen, 1);

    // Reads do not publish.
    client.counts().await.unwrap();
    assert!(!status.has_changed().unwrap());

    drop(client);
    handle.await.unwrap();
    assert!(status.changed().await.is_err());
}

#[tokio::test]
async fn test_overflow_modifier_update() {
    let config = KitchenConfig::default();
    let (actor, client) = KitchenActor::new(ShelfManager::from_config(&config).unwrap(), 8);
    let handle = tokio::spawn(actor.run());

    client.set_overflow_decay_modifier(3.0).await.unwrap();
    let status = client.snapshot().await.unwrap();
    assert_eq!(status.shelf(ShelfKind::Overflow).unwrap().decay_modifier, 3.0);

    let err = client.set_overflow_decay_modifier(f64::NAN).await.unwrap_err();
    assert!(matches!(err, KitchenError::Shelf(ShelfError::InvalidDecayModifier(_))));

    drop(client);
    handle.await.unwrap();
}

/// Many concurrent clients against one actor: no torn state, nothing lost.
#[tokio::test]
async fn test_concurrent_clients_preserve_invariants() {
    let mut config = KitchenConfig::default();
    config.shelves.hot_capacity = 3;
    config.shelves.cold_capacity = 3;
    config.shelves.frozen_capacity = 3;
    config.shelves.overflow_capacity = 4;
    let (actor, client) = KitchenActor::new(ShelfManager::from_config(&config).unwrap(), 4);
    let handle = tokio::spawn(actor.run());

    let mut tasks = Vec::new();
    for worker in 0..4u64 {
        let client = client.clone();
        tasks.push(tokio::spawn(async move {
            for i in 0..25u64 {
                let id = worker * 100 + i;
                let temperature = Temperature::ALL[(id % 3) as usize];
                client.place_order(order(id, temperature, 50, 0.8)).await.unwrap();
                if i % 3 == 0 {
                    client.dispatch_courier(temperature).await.unwrap();
                }
                if i % 5 == 0 {
                    client.heartbeat(Duration::from_secs(2)).await.unwrap();
                }
            }
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let status = client.snapshot().await.unwrap();
    for shelf in &status.shelves {
        assert!(shelf.orders.len() <= shelf.capacity);
    }
    let stats = status.stats;
    assert_eq!(stats.received, 100);
    assert_eq!(
        stats.received,
        stats.delivered + stats.wasted + status.counts().total() as u64
    );

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_client_reports_closed_actor() {
    let (actor, client) = KitchenActor::new(ShelfManager::from_config(&KitchenConfig::default()).unwrap(), 1);
    drop(actor);
    assert_eq!(client.counts().await, Err(KitchenError::ActorClosed));
}
