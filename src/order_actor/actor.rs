//! The desk actor: one task, one [`OrderBook`], requests handled one at a time.
//!
//! Because the loop owns the book exclusively, generation, matching and sweeps
//! are serialized without locks. Side effects (courier credit, events) run only
//! after the book has applied the whole transition.

use crate::clients::DeskClient;
use crate::config::{ConfigError, DeliveryConfig};
use crate::courier::Courier;
use crate::events::{DeliveryEvent, EventBus};
use crate::model::{LocationId, Order};
use crate::order_actor::{DeskRequest, OrderBook};
use crate::registry::LocationRegistry;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, info};

/// Dependencies injected when the desk starts running.
#[derive(Clone, Default)]
pub struct DeskContext {
    /// Credited on every completed order. Crediting is skipped when absent.
    pub courier: Option<Arc<dyn Courier>>,
}

pub struct OrderDesk {
    receiver: mpsc::Receiver<DeskRequest>,
    book: OrderBook,
    registry: Arc<LocationRegistry>,
    max_active_orders: usize,
    events: EventBus,
}

impl OrderDesk {
    /// Creates the desk and its client. Fails if `config` does not validate.
    pub fn new(
        buffer_size: usize,
        config: &DeliveryConfig,
        registry: Arc<LocationRegistry>,
        events: EventBus,
    ) -> Result<(Self, DeskClient), ConfigError> {
        let book = OrderBook::new(config)?;
        let (sender, receiver) = mpsc::channel(buffer_size);
        let desk = Self {
            receiver,
            book,
            registry,
            max_active_orders: config.max_active_orders,
            events: events.clone(),
        };
        let client = DeskClient::new(sender, events);
        Ok((desk, client))
    }

    /// Runs the desk loop until every client is dropped or a shutdown arrives.
    pub async fn run(mut self, ctx: DeskContext) {
        info!(max_active = self.max_active_orders, "Order desk started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                DeskRequest::CreateOrder { respect_cap, respond_to } => {
                    let order = self.create_order(respect_cap);
                    let _ = respond_to.send(order);
                }
                DeskRequest::ArrivedAtRestaurant { location, respond_to } => {
                    let order = self.arrived_at_restaurant(location);
                    let _ = respond_to.send(order);
                }
                DeskRequest::ArrivedAtCustomer { location, respond_to } => {
                    let order = self.arrived_at_customer(location, &ctx).await;
                    let _ = respond_to.send(order);
                }
                DeskRequest::SweepExpired { now, respond_to } => {
                    let expired = self.sweep_expired(now);
                    let _ = respond_to.send(expired);
                }
                DeskRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(self.book.snapshot());
                }
                DeskRequest::Stats { respond_to } => {
                    let _ = respond_to.send(self.book.stats());
                }
                DeskRequest::Shutdown => {
                    debug!("Shutdown requested");
                    break;
                }
            }
        }

        let stats = self.book.stats();
        info!(
            live = stats.live,
            generated = stats.total_generated,
            completed = stats.completed,
            expired = stats.expired,
            "Order desk stopped"
        );
    }

    fn create_order(&mut self, respect_cap: bool) -> Option<Order> {
        let live = self.book.live_count();
        if respect_cap && live >= self.max_active_orders {
            debug!(live, max_active = self.max_active_orders, "At capacity, skipping");
            return None;
        }

        let order = self.book.create_order(
            self.registry.restaurants(),
            self.registry.customers(),
            Instant::now(),
        );
        match &order {
            Some(order) => {
                info!(
                    order_id = %order.id,
                    from = %order.restaurant_name,
                    to = %order.customer_name,
                    reward = order.reward,
                    live = self.book.live_count(),
                    "Order added"
                );
                self.events.publish(DeliveryEvent::OrderAdded(order.clone()));
            }
            None => debug!("No restaurants or customers, no order created"),
        }
        order
    }

    fn arrived_at_restaurant(&mut self, location: LocationId) -> Option<Order> {
        let order = self.book.pick_up_at(location);
        match &order {
            Some(order) => {
                info!(order_id = %order.id, %location, "Order picked up");
                self.events.publish(DeliveryEvent::OrderPickedUp(order.clone()));
            }
            None => debug!(%location, "Nothing to pick up"),
        }
        order
    }

    async fn arrived_at_customer(&mut self, location: LocationId, ctx: &DeskContext) -> Option<Order> {
        let Some(order) = self.book.deliver_at(location) else {
            debug!(%location, "Nothing to deliver");
            return None;
        };

        info!(order_id = %order.id, %location, reward = order.reward, "Order completed");
        match &ctx.courier {
            Some(courier) => courier.credit(order.reward).await,
            None => debug!(order_id = %order.id, "No courier attached, reward not credited"),
        }
        self.events.publish(DeliveryEvent::OrderCompleted(order.clone()));
        Some(order)
    }

    fn sweep_expired(&mut self, now: Instant) -> Vec<Order> {
        let expired = self.book.sweep_expired(now);
        for order in &expired {
            info!(order_id = %order.id, "Order expired");
            self.events.publish(DeliveryEvent::OrderExpired(order.clone()));
        }
        if !expired.is_empty() {
            debug!(count = expired.len(), live = self.book.live_count(), "Sweep done");
        }
        expired
    }
}
