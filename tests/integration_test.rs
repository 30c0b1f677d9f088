use kitchen_shelves::config::KitchenConfig;
use kitchen_shelves::lifecycle::KitchenSystem;
use kitchen_shelves::model::{KitchenStatus, OrderCreate, Temperature};
use kitchen_shelves::sources::Catalog;

fn catalog() -> Catalog {
    let entry = |name: &str, temperature, shelf_life, decay_rate| OrderCreate {
        name: name.to_string(),
        temperature,
        shelf_life,
        decay_rate,
    };
    Catalog::new(vec![
        entry("Cheese Pizza", Temperature::Hot, 300, 0.45),
        entry("Banana Split", Temperature::Frozen, 20, 0.63),
        entry("Cobb Salad", Temperature::Cold, 269, 0.19),
        entry("Hot Dog", Temperature::Hot, 180, 0.65),
    ])
    .unwrap()
}

fn assert_consistent(status: &KitchenStatus) {
    for shelf in &status.shelves {
        assert!(
            shelf.orders.len() <= shelf.capacity,
            "{} holds {} of {}",
            shelf.kind,
            shelf.orders.len(),
            shelf.capacity
        );
    }
    let stats = status.stats;
    assert_eq!(
        stats.received,
        stats.delivered + stats.wasted + status.counts().total() as u64
    );
}

/// Full simulation with the real actor and all three producers, on paused time.
#[tokio::test(start_paused = true)]
async fn test_full_simulation_keeps_shelves_consistent() {
    let config = KitchenConfig {
        seed: Some(7),
        ..KitchenConfig::default()
    };
    let system = KitchenSystem::start(&config, catalog()).expect("Failed to start kitchen");
    let mut updates = system.subscribe();

    for _ in 0..300 {
        updates.changed().await.expect("Kitchen stopped early");
        let status = updates.borrow_and_update().clone();
        assert_consistent(&status);
    }

    let status = system.client().snapshot().await.expect("Failed to snapshot");
    assert_consistent(&status);
    assert!(status.stats.received > 0);
    assert!(status.stats.delivered > 0);

    system.shutdown().await.expect("Failed to shutdown");
}

#[tokio::test(start_paused = true)]
async fn test_saturated_kitchen_wastes_instead_of_overfilling() {
    let mut config = KitchenConfig {
        seed: Some(21),
        ..KitchenConfig::default()
    };
    config.shelves.hot_capacity = 2;
    config.shelves.cold_capacity = 2;
    config.shelves.frozen_capacity = 2;
    config.shelves.overflow_capacity = 2;
    config.schedule.arrival_rate = 20.0;
    config.schedule.courier_min_secs = 5.0;
    config.schedule.courier_max_secs = 6.0;

    let system = KitchenSystem::start(&config, catalog()).expect("Failed to start kitchen");
    let mut updates = system.subscribe();
    for _ in 0..200 {
        updates.changed().await.expect("Kitchen stopped early");
        assert_consistent(&updates.borrow_and_update());
    }

    let status = system.status();
    assert!(status.stats.wasted > 0);
    assert!(status.stats.rejected > 0);

    system.shutdown().await.expect("Failed to shutdown");
}

#[tokio::test]
async fn test_invalid_config_is_fatal_at_startup() {
    let mut config = KitchenConfig::default();
    config.shelves.hot_capacity = 0;
    assert!(KitchenSystem::start(&config, catalog()).is_err());
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_without_traffic() {
    let config = KitchenConfig {
        seed: Some(1),
        ..KitchenConfig::default()
    };
    let system = KitchenSystem::start(&config, catalog()).expect("Failed to start kitchen");
    let status = system.status();
    assert_eq!(status.shelves.len(), 4);
    assert_eq!(status.counts().total(), 0);
    system.shutdown().await.expect("Failed to shutdown");
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_waits_for_outstanding_client_clones() {
    let config = KitchenConfig {
        seed: Some(3),
        ..KitchenConfig::default()
    };
    let system = KitchenSystem::start(&config, catalog()).expect("Failed to start kitchen");
    let extra = system.client().clone();

    let shutdown = tokio::spawn(system.shutdown());
    tokio::time::sleep(std::time::Duration::from_secs(5)).await;
    assert!(!shutdown.is_finished());

    // The actor is still serving the outstanding clone.
    extra.counts().await.expect("Kitchen should still answer");
    drop(extra);
    shutdown
        .await
        .expect("Shutdown task panicked")
        .expect("Failed to shutdown");
}
