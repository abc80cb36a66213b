//! Plain-text status board for the live orders.

use crate::model::{Order, OrderState};
use crate::order_actor::DeskStats;
use std::fmt::{self, Display};
use tokio::time::Instant;

#[derive(Debug, Clone, PartialEq)]
pub struct StatusBoard {
    pub stats: DeskStats,
    pub rows: Vec<BoardRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardRow {
    pub order: Order,
    pub remaining_secs: u64,
}

impl StatusBoard {
    pub fn new(stats: DeskStats, orders: Vec<Order>, now: Instant) -> Self {
        let rows = orders
            .into_iter()
            .map(|order| BoardRow {
                remaining_secs: order.remaining(now).as_secs_f64().round() as u64,
                order,
            })
            .collect();
        Self { stats, rows }
    }
}

impl Display for StatusBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.stats;
        writeln!(f, "=== Delivery Orders ===")?;
        writeln!(f, "Active: {}", s.live)?;
        writeln!(f, "Waiting pickup: {}", s.waiting_pickup)?;
        writeln!(f, "Waiting delivery: {}", s.waiting_delivery)?;
        writeln!(f, "Completed: {} | Expired: {}", s.completed, s.expired)?;

        for row in &self.rows {
            let status = match row.order.state {
                OrderState::WaitingPickup => "waiting pickup",
                _ => "waiting delivery",
            };
            writeln!(
                f,
                "#{}: {} -> {}",
                row.order.id.0, row.order.restaurant_name, row.order.customer_name
            )?;
            writeln!(f, "  [{status}] {}s left", row.remaining_secs)?;
        }
        Ok(())
    }
}
