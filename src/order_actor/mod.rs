//! # Order Desk
//!
//! The order lifecycle manager. It creates orders, matches courier arrivals to
//! them and expires the stale ones.
//!
//! ## Structure
//!
//! - [`book`] - [`OrderBook`], the synchronous state machine
//! - [`actor`] - [`OrderDesk`], the task that owns the book
//! - [`messages`] - [`DeskRequest`] sent by [`DeskClient`]
//! - [`error`] - [`DeskError`]
//! - [`new()`] - Factory function that creates the desk and its client
//!
//! ## Usage
//!
//! ```rust
//! use delivery_orders::config::DeliveryConfig;
//! use delivery_orders::events::EventBus;
//! use delivery_orders::model::{LocationCreate, LocationId, OrderState};
//! use delivery_orders::order_actor::{self, DeskContext};
//! use delivery_orders::registry::LocationRegistry;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut registry = LocationRegistry::new();
//!     let pizza = registry.register(LocationCreate::restaurant("Pizza"));
//!     registry.register(LocationCreate::customer("Home"));
//!
//!     let (desk, client) = order_actor::new(&DeliveryConfig::default(), Arc::new(registry), EventBus::default())?;
//!     tokio::spawn(desk.run(DeskContext::default()));
//!
//!     client.create_order().await?;
//!     let order = client.arrived_at_restaurant(pizza).await?.unwrap();
//!     assert_eq!(order.state, OrderState::PickedUp);
//!     Ok(())
//! }
//! ```
//!
//! Matching always takes the first eligible order by creation order.

pub mod actor;
pub mod book;
pub mod error;
pub mod messages;

pub use actor::*;
pub use book::*;
pub use error::*;
pub use messages::*;

use crate::clients::DeskClient;
use crate::config::{ConfigError, DeliveryConfig};
use crate::events::EventBus;
use crate::registry::LocationRegistry;
use std::sync::Arc;

/// Creates a new order desk and its client.
///
/// The config is validated here, so a desk never starts with settings it cannot run.
pub fn new(
    config: &DeliveryConfig,
    registry: Arc<LocationRegistry>,
    events: EventBus,
) -> Result<(OrderDesk, DeskClient), ConfigError> {
    OrderDesk::new(32, config, registry, events)
}
