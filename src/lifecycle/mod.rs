//! # System Lifecycle & Orchestration
//!
//! Starts the order desk and its timed processes, wires in the registry, the
//! courier and the event bus, and tears everything down again.
//!
//! ## The DeliverySystem Pattern
//!
//! ```rust,ignore
//! let system = DeliverySystem::start(config, registry, Some(driver))?;
//!
//! // Courier drives into a restaurant
//! system.site_named("Pizza").unwrap().notify_arrived(driver.as_ref()).await?;
//!
//! system.shutdown().await?;
//! ```
//!
//! ## Timed Processes
//!
//! Three independent tasks talk to the desk only through its client:
//!
//! - **Seeder**: a few orders shortly after start, ignoring the cap
//! - **Generator**: one capped attempt per `generate_interval`
//! - **Sweeper**: an expiry sweep per `sweep_interval`
//!
//! Each runs in its own Tokio task, so a failure in one leaves the others running.
//! Shutdown aborts them mid-sleep; nothing in flight needs draining.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the subscriber; see the [`tracing`] module.

pub mod delivery_system;
pub mod timers;
pub mod tracing;

pub use delivery_system::*;
pub use timers::*;
pub use tracing::*;
