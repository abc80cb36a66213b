//! The order book: live orders, counters and every state transition.
//!
//! The book is plain synchronous state. [`OrderDesk`](crate::order_actor::OrderDesk)
//! owns one and is the only writer; it publishes events after each call returns,
//! so a transition (state, counters, live-set removal) is always complete before
//! anyone hears about it.

use crate::config::{ConfigError, DeliveryConfig};
use crate::model::{Location, LocationId, Order, OrderId, OrderState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::time::Instant;

/// Counters and per-state counts at one instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DeskStats {
    pub live: usize,
    pub waiting_pickup: usize,
    pub waiting_delivery: usize,
    pub total_generated: u32,
    pub completed: u32,
    pub expired: u32,
}

#[derive(Debug)]
pub struct OrderBook {
    // Ids only grow, so key order is insertion order.
    live: BTreeMap<OrderId, Order>,
    total_generated: u32,
    completed: u32,
    expired: u32,
    ttl: Duration,
    reward_min: f64,
    reward_max: f64,
    rng: StdRng,
}

impl OrderBook {
    /// Builds an empty book. Fails if `config` does not validate.
    pub fn new(config: &DeliveryConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            live: BTreeMap::new(),
            total_generated: 0,
            completed: 0,
            expired: 0,
            ttl: config.order_ttl(),
            reward_min: config.reward_min,
            reward_max: config.reward_max,
            rng,
        })
    }

    /// Draws a new order. `None` when either location set is empty.
    ///
    /// If restaurant and customer coincide the customer is redrawn once; a second
    /// coincidence is kept.
    pub fn create_order(
        &mut self,
        restaurants: &[Location],
        customers: &[Location],
        now: Instant,
    ) -> Option<Order> {
        if restaurants.is_empty() || customers.is_empty() {
            return None;
        }

        let restaurant = &restaurants[self.rng.gen_range(0..restaurants.len())];
        let mut customer = &customers[self.rng.gen_range(0..customers.len())];
        if customer.id == restaurant.id {
            customer = &customers[self.rng.gen_range(0..customers.len())];
        }

        let reward = self.rng.gen_range(self.reward_min..self.reward_max);

        self.total_generated += 1;
        let id = OrderId(self.total_generated);
        let order = Order::new(id, restaurant, customer, reward, now, self.ttl);
        self.live.insert(id, order.clone());
        Some(order)
    }

    /// First order waiting at `restaurant` moves to `PickedUp`.
    pub fn pick_up_at(&mut self, restaurant: LocationId) -> Option<Order> {
        let order = self
            .live
            .values_mut()
            .find(|o| o.restaurant == restaurant && o.state == OrderState::WaitingPickup)?;
        order.state = OrderState::PickedUp;
        Some(order.clone())
    }

    /// First picked-up order for `customer` is completed and leaves the live set.
    pub fn deliver_at(&mut self, customer: LocationId) -> Option<Order> {
        let id = self
            .live
            .values()
            .find(|o| o.customer == customer && o.state == OrderState::PickedUp)
            .map(|o| o.id)?;

        let mut order = self.live.remove(&id)?;
        order.state = OrderState::Completed;
        self.completed += 1;
        Some(order)
    }

    /// Expires every live order past its time-to-live, in id order.
    pub fn sweep_expired(&mut self, now: Instant) -> Vec<Order> {
        let due: Vec<OrderId> = self
            .live
            .values()
            .filter(|o| o.is_expired(now))
            .map(|o| o.id)
            .collect();

        let mut expired = Vec::with_capacity(due.len());
        for id in due {
            if let Some(mut order) = self.live.remove(&id) {
                order.state = OrderState::Expired;
                self.expired += 1;
                expired.push(order);
            }
        }
        expired
    }

    pub fn snapshot(&self) -> Vec<Order> {
        self.live.values().cloned().collect()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn pickup_waiting_count(&self) -> usize {
        self.count_in(OrderState::WaitingPickup)
    }

    pub fn delivery_waiting_count(&self) -> usize {
        self.count_in(OrderState::PickedUp)
    }

    pub fn stats(&self) -> DeskStats {
        DeskStats {
            live: self.live.len(),
            waiting_pickup: self.pickup_waiting_count(),
            waiting_delivery: self.delivery_waiting_count(),
            total_generated: self.total_generated,
            completed: self.completed,
            expired: self.expired,
        }
    }

    fn count_in(&self, state: OrderState) -> usize {
        self.live.values().filter(|o| o.state == state).count()
    }
}
