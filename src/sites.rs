//! # Location Sites
//!
//! A [`LocationSite`] stands in for one physical location and receives discrete
//! courier arrival and departure notifications. It is the only caller of the
//! desk's matching operations.
//!
//! | Kind | On arrival |
//! |------|------------|
//! | Restaurant | desk picks up the first waiting order there |
//! | Customer | desk completes the first picked-up order there, or the courier completes the delivery itself when the site has no desk |
//! | ChargingStation | courier battery recharged, desk untouched |

use crate::clients::DeskClient;
use crate::courier::Courier;
use crate::events::{DeliveryEvent, EventBus};
use crate::model::{Location, LocationKind, Order};
use crate::order_actor::DeskError;
use crate::registry::LocationRegistry;
use tracing::{debug, info};

#[derive(Clone)]
pub struct LocationSite {
    location: Location,
    desk: Option<DeskClient>,
    events: EventBus,
}

impl LocationSite {
    /// A site wired to a running desk. Events go to the desk's bus.
    pub fn managed(location: Location, desk: DeskClient) -> Self {
        let events = desk.events().clone();
        Self { location, desk: Some(desk), events }
    }

    /// A site with no desk. Customer arrivals fall back to the courier.
    pub fn unmanaged(location: Location, events: EventBus) -> Self {
        Self { location, desk: None, events }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Handles one arrival. Returns the order that changed state, if any.
    pub async fn notify_arrived(&self, courier: &dyn Courier) -> Result<Option<Order>, DeskError> {
        let name = &self.location.name;
        debug!(site = %name, kind = %self.location.kind, "Courier arrived");
        self.events.publish(DeliveryEvent::DriverEnteredLocation(name.clone()));

        let changed = match (self.location.kind, &self.desk) {
            (LocationKind::Restaurant, Some(desk)) => desk.arrived_at_restaurant(self.location.id).await?,
            (LocationKind::Restaurant, None) => None,
            (LocationKind::Customer, Some(desk)) => desk.arrived_at_customer(self.location.id).await?,
            (LocationKind::Customer, None) => {
                courier.complete_delivery_if_unmanaged().await;
                None
            }
            (LocationKind::ChargingStation, _) => {
                courier.recharge_battery().await;
                None
            }
        };

        self.events.publish(DeliveryEvent::ServiceUsed(self.location.kind));
        Ok(changed)
    }

    pub async fn notify_departed(&self, _courier: &dyn Courier) {
        info!(site = %self.location.name, "Courier left");
        self.events
            .publish(DeliveryEvent::DriverExitedLocation(self.location.name.clone()));
    }
}

/// One managed site per registered location, in registration order.
pub fn managed_sites(registry: &LocationRegistry, desk: &DeskClient) -> Vec<LocationSite> {
    registry
        .all()
        .iter()
        .cloned()
        .map(|location| LocationSite::managed(location, desk.clone()))
        .collect()
}
