use delivery_orders::config::{ConfigError, DeliveryConfig};
use delivery_orders::courier::{Courier, Driver, FULL_BATTERY};
use delivery_orders::events::DeliveryEvent;
use delivery_orders::lifecycle::DeliverySystem;
use delivery_orders::model::{LocationCreate, LocationKind, OrderState};
use delivery_orders::order_actor::DeskError;
use delivery_orders::registry::LocationRegistry;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

fn town() -> LocationRegistry {
    vec![
        LocationCreate::restaurant("Pizza Palace"),
        LocationCreate::customer("Blue House"),
        LocationCreate::charging_station("Charger"),
    ]
    .into_iter()
    .collect()
}

fn quiet_config() -> DeliveryConfig {
    DeliveryConfig {
        initial_orders: 0,
        rng_seed: Some(3),
        order_ttl_secs: 1000.0,
        ..Default::default()
    }
}

/// Full end-to-end run: seeded orders, pickup, delivery, recharge.
#[tokio::test(start_paused = true)]
async fn test_full_delivery_round_trip() {
    let driver = Arc::new(Driver::new("Kim", 40.0));
    let courier: Arc<dyn Courier> = driver.clone();
    let config = DeliveryConfig {
        initial_orders: 1,
        rng_seed: Some(3),
        ..Default::default()
    };
    let system = DeliverySystem::start(config, town(), Some(courier)).unwrap();
    let mut events = system.desk.subscribe();

    sleep(Duration::from_secs(2)).await;
    let orders = system.desk.snapshot_orders().await.unwrap();
    assert_eq!(orders.len(), 1);
    let order = orders[0].clone();

    let restaurant = system.site_named("Pizza Palace").unwrap();
    let picked = restaurant.notify_arrived(driver.as_ref()).await.unwrap().unwrap();
    assert_eq!(picked.state, OrderState::PickedUp);
    restaurant.notify_departed(driver.as_ref()).await;

    let customer = system.site_named("Blue House").unwrap();
    let done = customer.notify_arrived(driver.as_ref()).await.unwrap().unwrap();
    assert_eq!(done.state, OrderState::Completed);

    let charger = system.site_named("Charger").unwrap();
    assert!(charger.notify_arrived(driver.as_ref()).await.unwrap().is_none());

    let status = driver.status().await;
    assert_eq!(status.balance, order.reward);
    assert_eq!(status.battery, FULL_BATTERY);

    let stats = system.desk.stats().await.unwrap();
    assert_eq!((stats.live, stats.completed, stats.expired), (0, 1, 0));

    let mut seen = Vec::new();
    while let Ok(event) = events.try_recv() {
        seen.push(event);
    }
    assert_eq!(seen[0], DeliveryEvent::OrderAdded(order.clone()));
    assert_eq!(seen[1], DeliveryEvent::DriverEnteredLocation("Pizza Palace".into()));
    assert!(matches!(seen[2], DeliveryEvent::OrderPickedUp(_)));
    assert_eq!(seen[3], DeliveryEvent::ServiceUsed(LocationKind::Restaurant));
    assert_eq!(seen[4], DeliveryEvent::DriverExitedLocation("Pizza Palace".into()));
    assert!(seen.iter().any(|e| matches!(e, DeliveryEvent::OrderCompleted(o) if o.id == order.id)));
    assert_eq!(seen.last(), Some(&DeliveryEvent::ServiceUsed(LocationKind::ChargingStation)));

    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_seeder_ignores_cap() {
    let config = DeliveryConfig {
        max_active_orders: 1,
        initial_orders: 3,
        ..quiet_config()
    };
    let system = DeliverySystem::start(config, town(), None).unwrap();

    // Seeder posts at 1.0s, 1.5s and 2.0s.
    sleep(Duration::from_secs(3)).await;
    assert_eq!(system.desk.stats().await.unwrap().live, 3);

    // Generator at 15s is over the cap and adds nothing.
    sleep(Duration::from_secs(14)).await;
    assert_eq!(system.desk.total_generated().await.unwrap(), 3);

    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_generator_waits_for_free_slot() {
    let config = DeliveryConfig {
        max_active_orders: 1,
        ..quiet_config()
    };
    let system = DeliverySystem::start(config, town(), None).unwrap();

    sleep(Duration::from_secs(16)).await;
    assert_eq!(system.desk.total_generated().await.unwrap(), 1);

    // Ticks at 30s and 45s find the desk full.
    sleep(Duration::from_secs(30)).await;
    let stats = system.desk.stats().await.unwrap();
    assert_eq!((stats.live, stats.total_generated), (1, 1));

    let courier = Driver::new("Kim", 100.0);
    system.site_named("Pizza Palace").unwrap().notify_arrived(&courier).await.unwrap();
    system.site_named("Blue House").unwrap().notify_arrived(&courier).await.unwrap();
    assert_eq!(system.desk.stats().await.unwrap().live, 0);

    // Next tick at 60s fills the slot again.
    sleep(Duration::from_secs(15)).await;
    let stats = system.desk.stats().await.unwrap();
    assert_eq!((stats.live, stats.total_generated, stats.completed), (1, 2, 1));

    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_sweeper_expires_unclaimed_orders() {
    let config = DeliveryConfig {
        initial_orders: 1,
        order_ttl_secs: 10.0,
        generate_interval_secs: 500.0,
        ..quiet_config()
    };
    let system = DeliverySystem::start(config, town(), None).unwrap();
    let mut events = system.desk.subscribe();

    // Order posted at 1s; sweeps at 5s and 10s keep it, the one at 15s expires it.
    sleep(Duration::from_secs(12)).await;
    assert_eq!(system.desk.stats().await.unwrap().live, 1);

    sleep(Duration::from_secs(4)).await;
    let stats = system.desk.stats().await.unwrap();
    assert_eq!((stats.live, stats.expired), (0, 1));

    sleep(Duration::from_secs(20)).await;
    assert_eq!(system.desk.expired_count().await.unwrap(), 1);

    let mut expired_events = 0;
    while let Ok(event) = events.try_recv() {
        if matches!(event, DeliveryEvent::OrderExpired(_)) {
            expired_events += 1;
        }
    }
    assert_eq!(expired_events, 1);

    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_board_reports_live_orders() {
    let config = DeliveryConfig { initial_orders: 2, ..quiet_config() };
    let system = DeliverySystem::start(config, town(), None).unwrap();

    sleep(Duration::from_secs(2)).await;
    let text = system.board().await.unwrap().to_string();

    assert!(text.contains("Active: 2"));
    assert!(text.contains("#1: Pizza Palace -> Blue House"));
    assert!(text.contains("#2: Pizza Palace -> Blue House"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_invalid_config_refuses_to_start() {
    let config = DeliveryConfig {
        sweep_interval_secs: 0.0,
        ..Default::default()
    };
    let result = DeliverySystem::start(config, town(), None);
    assert!(matches!(
        result,
        Err(ConfigError::Invalid { field: "sweep_interval_secs", .. })
    ));
}

#[tokio::test]
async fn test_ttl_beyond_duration_range_refuses_to_start() {
    let config = DeliveryConfig {
        order_ttl_secs: 1e20,
        ..Default::default()
    };
    let result = DeliverySystem::start(config, town(), None);
    assert!(matches!(
        result,
        Err(ConfigError::Invalid { field: "order_ttl_secs", .. })
    ));
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_closes_desk() {
    let system = DeliverySystem::start(quiet_config(), town(), None).unwrap();
    let desk = system.desk.clone();

    system.shutdown().await.unwrap();

    assert_eq!(desk.stats().await, Err(DeskError::Closed));
}
