//! # Desk Client
//!
//! Cloneable handle to a running [`OrderDesk`](crate::order_actor::OrderDesk).
//! Every method is one request and one reply, so each call has fully completed
//! on the desk before it returns.

use crate::events::{DeliveryEvent, EventBus};
use crate::model::{LocationId, Order};
use crate::order_actor::{DeskError, DeskRequest, DeskStats};
use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::time::Instant;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct DeskClient {
    sender: mpsc::Sender<DeskRequest>,
    events: EventBus,
}

impl DeskClient {
    pub fn new(sender: mpsc::Sender<DeskRequest>, events: EventBus) -> Self {
        Self { sender, events }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> DeskRequest,
    ) -> Result<T, DeskError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| DeskError::Closed)?;
        response.await.map_err(|_| DeskError::Dropped)
    }

    /// Creates an order regardless of the active-order cap.
    #[instrument(skip(self))]
    pub async fn create_order(&self) -> Result<Option<Order>, DeskError> {
        debug!("Sending request");
        self.request(|respond_to| DeskRequest::CreateOrder { respect_cap: false, respond_to })
            .await
    }

    /// Creates an order only while fewer than `max_active_orders` are live.
    #[instrument(skip(self))]
    pub async fn generate_order(&self) -> Result<Option<Order>, DeskError> {
        debug!("Sending request");
        self.request(|respond_to| DeskRequest::CreateOrder { respect_cap: true, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn arrived_at_restaurant(&self, location: LocationId) -> Result<Option<Order>, DeskError> {
        debug!("Sending request");
        self.request(|respond_to| DeskRequest::ArrivedAtRestaurant { location, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn arrived_at_customer(&self, location: LocationId) -> Result<Option<Order>, DeskError> {
        debug!("Sending request");
        self.request(|respond_to| DeskRequest::ArrivedAtCustomer { location, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn sweep_expired(&self, now: Instant) -> Result<Vec<Order>, DeskError> {
        self.request(|respond_to| DeskRequest::SweepExpired { now, respond_to })
            .await
    }

    /// Owned copy of the live orders in creation order.
    pub async fn snapshot_orders(&self) -> Result<Vec<Order>, DeskError> {
        self.request(|respond_to| DeskRequest::Snapshot { respond_to }).await
    }

    pub async fn stats(&self) -> Result<DeskStats, DeskError> {
        self.request(|respond_to| DeskRequest::Stats { respond_to }).await
    }

    pub async fn pickup_waiting_count(&self) -> Result<usize, DeskError> {
        Ok(self.stats().await?.waiting_pickup)
    }

    pub async fn delivery_waiting_count(&self) -> Result<usize, DeskError> {
        Ok(self.stats().await?.waiting_delivery)
    }

    pub async fn total_generated(&self) -> Result<u32, DeskError> {
        Ok(self.stats().await?.total_generated)
    }

    pub async fn completed_count(&self) -> Result<u32, DeskError> {
        Ok(self.stats().await?.completed)
    }

    pub async fn expired_count(&self) -> Result<u32, DeskError> {
        Ok(self.stats().await?.expired)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DeliveryEvent> {
        self.events.subscribe()
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Asks the desk loop to stop after the requests already queued.
    pub async fn shutdown(&self) -> Result<(), DeskError> {
        self.sender
            .send(DeskRequest::Shutdown)
            .await
            .map_err(|_| DeskError::Closed)
    }
}
