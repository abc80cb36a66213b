//! # Courier
//!
//! The courier is the collaborator the desk credits and the charging stations
//! recharge. It is injected as `Arc<dyn Courier>` so tests can record calls.

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::info;

pub const FULL_BATTERY: f64 = 100.0;

#[async_trait]
pub trait Courier: Send + Sync {
    /// Adds a delivery reward to the courier's balance.
    async fn credit(&self, amount: f64);

    /// Completes a delivery directly when no desk manages orders.
    async fn complete_delivery_if_unmanaged(&self);

    /// Refills the battery at a charging station.
    async fn recharge_battery(&self);
}

/// Snapshot of a [`Driver`].
#[derive(Debug, Clone, PartialEq)]
pub struct DriverStatus {
    pub name: String,
    pub balance: f64,
    pub deliveries: u32,
    pub battery: f64,
}

/// The player's courier.
#[derive(Debug)]
pub struct Driver {
    status: Mutex<DriverStatus>,
}

impl Driver {
    pub fn new(name: impl Into<String>, battery: f64) -> Self {
        Self {
            status: Mutex::new(DriverStatus {
                name: name.into(),
                balance: 0.0,
                deliveries: 0,
                battery: battery.clamp(0.0, FULL_BATTERY),
            }),
        }
    }

    pub async fn status(&self) -> DriverStatus {
        self.status.lock().await.clone()
    }

    /// Drains the battery, e.g. after driving a stretch.
    pub async fn drain(&self, amount: f64) {
        let mut status = self.status.lock().await;
        status.battery = (status.battery - amount).max(0.0);
    }
}

#[async_trait]
impl Courier for Driver {
    async fn credit(&self, amount: f64) {
        let mut status = self.status.lock().await;
        status.balance += amount;
        status.deliveries += 1;
        info!(driver = %status.name, amount, balance = status.balance, "Reward credited");
    }

    async fn complete_delivery_if_unmanaged(&self) {
        let mut status = self.status.lock().await;
        status.deliveries += 1;
        info!(driver = %status.name, deliveries = status.deliveries, "Delivery completed without desk");
    }

    async fn recharge_battery(&self) {
        let mut status = self.status.lock().await;
        status.battery = FULL_BATTERY;
        info!(driver = %status.name, "Battery recharged");
    }
}
