use crate::board::StatusBoard;
use crate::clients::DeskClient;
use crate::config::{ConfigError, DeliveryConfig};
use crate::courier::Courier;
use crate::events::EventBus;
use crate::lifecycle::{run_generator, run_seeder, run_sweeper};
use crate::model::LocationId;
use crate::order_actor::{self, DeskContext, DeskError};
use crate::registry::LocationRegistry;
use crate::sites::{managed_sites, LocationSite};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{error, info};

/// The runtime orchestrator for a delivery session.
///
/// `DeliverySystem` is responsible for:
/// - **Validation**: rejecting a bad [`DeliveryConfig`] before anything starts
/// - **Dependency Wiring**: registry and courier go to the desk, the desk client to the sites
/// - **Lifecycle Management**: spawning the desk and its three timed processes, and stopping them
///
/// # Example
///
/// ```ignore
/// let system = DeliverySystem::start(DeliveryConfig::default(), registry, Some(driver.clone()))?;
///
/// let mut events = system.desk.subscribe();
/// let site = system.site_named("Pizza Palace").unwrap();
/// site.notify_arrived(driver.as_ref()).await?;
///
/// system.shutdown().await?;
/// ```
pub struct DeliverySystem {
    /// Client for the order desk
    pub desk: DeskClient,

    /// The locations of this session
    pub registry: Arc<LocationRegistry>,

    /// One site per registered location, in registration order
    pub sites: Vec<LocationSite>,

    desk_handle: JoinHandle<()>,
    timer_handles: Vec<JoinHandle<()>>,
}

impl DeliverySystem {
    /// Validates `config`, then starts the desk, seeder, generator and sweeper.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn start(
        config: DeliveryConfig,
        registry: LocationRegistry,
        courier: Option<Arc<dyn Courier>>,
    ) -> Result<Self, ConfigError> {
        let registry = Arc::new(registry);
        let (desk, client) = order_actor::new(&config, registry.clone(), EventBus::default())
            .inspect_err(|e| error!(error = %e, "Refusing to start order desk"))?;
        registry.log_summary();

        // Desk needs the courier to credit completed orders
        let desk_handle = tokio::spawn(desk.run(DeskContext { courier }));

        let timer_handles = vec![
            tokio::spawn(run_seeder(
                client.clone(),
                config.seed_delay(),
                config.seed_spacing(),
                config.initial_orders,
            )),
            tokio::spawn(run_generator(client.clone(), config.generate_interval())),
            tokio::spawn(run_sweeper(client.clone(), config.sweep_interval())),
        ];

        let sites = managed_sites(&registry, &client);

        Ok(Self {
            desk: client,
            registry,
            sites,
            desk_handle,
            timer_handles,
        })
    }

    pub fn site(&self, id: LocationId) -> Option<&LocationSite> {
        self.sites.iter().find(|s| s.location().id == id)
    }

    /// First site with the given display name.
    pub fn site_named(&self, name: &str) -> Option<&LocationSite> {
        self.sites.iter().find(|s| s.location().name == name)
    }

    pub async fn board(&self) -> Result<StatusBoard, DeskError> {
        let stats = self.desk.stats().await?;
        let orders = self.desk.snapshot_orders().await?;
        Ok(StatusBoard::new(stats, orders, Instant::now()))
    }

    /// Stops the timed processes, then the desk.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the desk stopped cleanly
    /// - `Err(String)` if the desk task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down delivery system...");

        for handle in self.timer_handles {
            handle.abort();
            if let Err(e) = handle.await {
                if e.is_panic() {
                    error!("Timer task panicked: {:?}", e);
                }
            }
        }

        // Sites keep client clones alive, so ask the desk to stop explicitly.
        let _ = self.desk.shutdown().await;
        drop(self.sites);
        drop(self.desk);

        if let Err(e) = self.desk_handle.await {
            error!("Desk task failed: {:?}", e);
            return Err(format!("Desk task failed: {:?}", e));
        }

        info!("Delivery system shutdown complete.");
        Ok(())
    }
}
