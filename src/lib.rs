//! # Delivery Orders
//!
//! > **An order desk for a small delivery game, built as a Tokio actor.**
//!
//! Restaurants, customers and charging stations are static locations. A courier
//! drives between them; the order desk keeps generating delivery orders, matches
//! the courier's arrivals against them and expires the ones nobody delivered.
//!
//! ## 🏗️ Design
//!
//! ### Single writer
//! The desk runs in one Tokio task and owns every live order. Generation, arrival
//! matching and expiry sweeps are messages it handles one at a time, so no order is
//! ever seen half-updated and no locks are needed.
//!
//! ### Events after the fact
//! Every transition is applied in full (state, counters, live set) before its
//! [`DeliveryEvent`](events::DeliveryEvent) is published on the broadcast bus.
//!
//! ### Explicit wiring
//! The registry, the courier and the event bus are handed to the desk when it is
//! built or started. Nothing is looked up globally.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Core ([`order_actor`])
//! - **Role**: The order lifecycle: create, pick up, complete, expire.
//! - **Key items**: [`OrderBook`](order_actor::OrderBook), [`OrderDesk`](order_actor::OrderDesk).
//!
//! ### 2. The Orchestrator ([`lifecycle`])
//! - **Role**: Starts the desk plus the seeder, generator and sweeper tasks; shuts them down.
//! - **Key items**: [`DeliverySystem`](lifecycle::DeliverySystem), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ### 3. The Interface ([`clients`], [`sites`])
//! - **Role**: [`DeskClient`](clients::DeskClient) hides the message passing;
//!   [`LocationSite`](sites::LocationSite) turns courier arrivals into desk calls.
//!
//! ### 4. The Data ([`model`], [`registry`], [`config`])
//! - **Role**: Orders, locations, the location registry and the desk configuration.
//!
//! ### 5. The Edges ([`courier`], [`events`], [`board`])
//! - **Role**: The courier collaborator, the event bus and a text status board.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod board;
pub mod clients;
pub mod config;
pub mod courier;
pub mod events;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod registry;
pub mod sites;
