//! A single delivery request from a restaurant to a customer.
//!
//! Everything except [`Order::state`] is fixed at creation. The desk owns live
//! orders; callers only ever see clones.

use crate::model::{Location, LocationId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::time::Duration;
use tokio::time::Instant;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Lifecycle of an order. `Completed` and `Expired` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderState {
    WaitingPickup,
    PickedUp,
    Completed,
    Expired,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub restaurant: LocationId,
    pub restaurant_name: String,
    pub customer: LocationId,
    pub customer_name: String,
    pub reward: f64,
    pub created_at: Instant,
    pub ttl: Duration,
    pub state: OrderState,
}

impl Order {
    /// Creates a new order waiting for pickup.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (assigned by the desk)
    /// * `restaurant` - Where the food is picked up
    /// * `customer` - Where the food is delivered
    /// * `reward` - Amount credited to the courier on completion
    /// * `created_at` - Start of the time-to-live window
    /// * `ttl` - How long the order stays valid
    pub fn new(
        id: OrderId,
        restaurant: &Location,
        customer: &Location,
        reward: f64,
        created_at: Instant,
        ttl: Duration,
    ) -> Self {
        Self {
            id,
            restaurant: restaurant.id,
            restaurant_name: restaurant.name.clone(),
            customer: customer.id,
            customer_name: customer.name.clone(),
            reward,
            created_at,
            ttl,
            state: OrderState::WaitingPickup,
        }
    }

    /// True once more than `ttl` has elapsed since creation and the order was not delivered.
    pub fn is_expired(&self, now: Instant) -> bool {
        self.state != OrderState::Completed
            && now.saturating_duration_since(self.created_at) > self.ttl
    }

    /// Time left before the order expires, zero once it has.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.ttl
            .saturating_sub(now.saturating_duration_since(self.created_at))
    }
}
