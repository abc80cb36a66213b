//! # Delivery Events
//!
//! Everything the presentation layer can react to. The desk publishes order events
//! only after a transition is fully applied; sites publish courier movement events.
//!
//! Publishing never fails: with no subscribers the event is dropped.

use crate::model::{LocationKind, Order};
use tokio::sync::broadcast;
use tracing::trace;

#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryEvent {
    OrderAdded(Order),
    OrderPickedUp(Order),
    OrderCompleted(Order),
    OrderExpired(Order),
    DriverEnteredLocation(String),
    DriverExitedLocation(String),
    ServiceUsed(LocationKind),
}

/// Cloneable handle to the broadcast channel carrying [`DeliveryEvent`]s.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<DeliveryEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn publish(&self, event: DeliveryEvent) {
        trace!(?event, "Publishing");
        // Err only means nobody is listening.
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DeliveryEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(256)
    }
}
