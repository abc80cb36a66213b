//! # Location Registry
//!
//! Classifies the static locations of a session by role. Orders are drawn from
//! [`LocationRegistry::restaurants`] and [`LocationRegistry::customers`]; charging
//! stations are registered but take no part in orders.

use crate::model::{Location, LocationCreate, LocationId, LocationKind};
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct LocationRegistry {
    all: Vec<Location>,
    restaurants: Vec<Location>,
    customers: Vec<Location>,
}

impl LocationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a location and returns its id. Ids start at 1.
    pub fn register(&mut self, params: LocationCreate) -> LocationId {
        let id = LocationId(self.all.len() as u32 + 1);
        let location = Location::new(id, params.kind, params.name);
        debug!(%id, kind = %location.kind, name = %location.name, "Registered location");

        match location.kind {
            LocationKind::Restaurant => self.restaurants.push(location.clone()),
            LocationKind::Customer => self.customers.push(location.clone()),
            LocationKind::ChargingStation => {}
        }
        self.all.push(location);
        id
    }

    pub fn restaurants(&self) -> &[Location] {
        &self.restaurants
    }

    pub fn customers(&self) -> &[Location] {
        &self.customers
    }

    pub fn all(&self) -> &[Location] {
        &self.all
    }

    /// Logs how many locations of each role were found.
    pub fn log_summary(&self) {
        info!(
            restaurants = self.restaurants.len(),
            customers = self.customers.len(),
            total = self.all.len(),
            "Locations registered"
        );
    }
}

impl FromIterator<LocationCreate> for LocationRegistry {
    fn from_iter<I: IntoIterator<Item = LocationCreate>>(iter: I) -> Self {
        let mut registry = Self::new();
        for params in iter {
            registry.register(params);
        }
        registry
    }
}
