//! Requests understood by the desk.
//!
//! Each variant carries a one-shot reply channel; the desk answers after the
//! request is fully applied.

use crate::model::{LocationId, Order};
use crate::order_actor::DeskStats;
use tokio::sync::oneshot;
use tokio::time::Instant;

/// Reply channel for a desk request.
pub type Response<T> = oneshot::Sender<T>;

#[derive(Debug)]
pub enum DeskRequest {
    /// Create one order. With `respect_cap` the desk declines at the cap.
    CreateOrder {
        respect_cap: bool,
        respond_to: Response<Option<Order>>,
    },
    ArrivedAtRestaurant {
        location: LocationId,
        respond_to: Response<Option<Order>>,
    },
    ArrivedAtCustomer {
        location: LocationId,
        respond_to: Response<Option<Order>>,
    },
    SweepExpired {
        now: Instant,
        respond_to: Response<Vec<Order>>,
    },
    Snapshot {
        respond_to: Response<Vec<Order>>,
    },
    Stats {
        respond_to: Response<DeskStats>,
    },
    /// Stop the desk loop even if clients are still alive.
    Shutdown,
}
