//! # Observability & Tracing
//!
//! Structured logging for the desk, its timers and the sites.
//!
//! ## What Gets Traced
//!
//! - **Desk lifecycle**: startup, shutdown and final counters
//! - **Order transitions**: added, picked up, completed, expired (with `order_id`)
//! - **Timers**: each tick at `debug`, failures at `warn`
//! - **Sites**: courier arrivals and departures
//!
//! ## Usage Examples
//!
//! ```bash
//! # Order transitions only
//! RUST_LOG=info cargo run
//!
//! # Every request and timer tick
//! RUST_LOG=debug cargo run
//!
//! # Just the desk
//! RUST_LOG=delivery_orders::order_actor=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a pickup and delivery look like:
//!
//! ```text
//! INFO Order added order_id=order_1 from=Pizza Palace to=Blue House reward=5321.7 live=1
//! INFO arrived_at_restaurant{location=LocationId(1)}: Order picked up order_id=order_1 location=location_1
//! INFO arrived_at_customer{location=LocationId(4)}: Order completed order_id=order_1 location=location_4 reward=5321.7
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
