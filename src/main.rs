//! # Delivery Orders Demo
//!
//! Builds a small town, starts the [`DeliverySystem`] and drives one courier
//! through a pickup, a delivery and a recharge.
//!
//! Pass a JSON config path as the first argument to override the defaults.

use delivery_orders::config::DeliveryConfig;
use delivery_orders::courier::{Courier, Driver};
use delivery_orders::lifecycle::{setup_tracing, DeliverySystem};
use delivery_orders::model::{LocationCreate, LocationKind};
use delivery_orders::registry::LocationRegistry;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path).map_err(|e| format!("{path}: {e}"))?;
            DeliveryConfig::from_json_str(&json).map_err(|e| e.to_string())?
        }
        None => DeliveryConfig::default(),
    };

    let registry: LocationRegistry = vec![
        LocationCreate::restaurant("Pizza Palace"),
        LocationCreate::restaurant("Noodle Bar"),
        LocationCreate::customer("Blue House"),
        LocationCreate::customer("Corner Office"),
        LocationCreate::customer("Park Bench"),
        LocationCreate::charging_station("Charger"),
    ]
    .into_iter()
    .collect();

    let driver = Arc::new(Driver::new("Kim", 60.0));
    let courier: Arc<dyn Courier> = driver.clone();
    let system = DeliverySystem::start(config, registry, Some(courier)).map_err(|e| e.to_string())?;

    // Give the seeder time to post its orders
    tokio::time::sleep(Duration::from_secs(3)).await;
    let board = system.board().await.map_err(|e| e.to_string())?;
    println!("{board}");

    let span = tracing::info_span!("delivery_run");
    async {
        let Some(order) = system.desk.snapshot_orders().await.map_err(|e| e.to_string())?.into_iter().next() else {
            warn!("No orders to deliver");
            return Ok::<(), String>(());
        };

        for (location, drive) in [(order.restaurant, 20.0), (order.customer, 15.0)] {
            let Some(site) = system.site(location) else { continue };
            driver.drain(drive).await;
            site.notify_arrived(driver.as_ref()).await.map_err(|e| e.to_string())?;
            site.notify_departed(driver.as_ref()).await;
        }

        if let Some(charger) = system
            .sites
            .iter()
            .find(|s| s.location().kind == LocationKind::ChargingStation)
        {
            charger.notify_arrived(driver.as_ref()).await.map_err(|e| e.to_string())?;
            charger.notify_departed(driver.as_ref()).await;
        }
        Ok(())
    }
    .instrument(span)
    .await?;

    let status = driver.status().await;
    info!(balance = status.balance, battery = status.battery, "Courier status");

    let board = system.board().await.map_err(|e| e.to_string())?;
    println!("{board}");

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
