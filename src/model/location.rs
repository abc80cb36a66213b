//! A physical place the courier can drive into.
//!
//! Locations are owned by the [`LocationRegistry`](crate::registry::LocationRegistry);
//! orders only hold their [`LocationId`].

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LocationId(pub u32);

impl Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "location_{}", self.0)
    }
}

/// What happens when the courier arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationKind {
    Restaurant,
    Customer,
    ChargingStation,
}

impl Display for LocationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LocationKind::Restaurant => "restaurant",
            LocationKind::Customer => "customer",
            LocationKind::ChargingStation => "charging station",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub kind: LocationKind,
    /// Display name. Not required to be unique.
    pub name: String,
}

impl Location {
    pub fn new(id: LocationId, kind: LocationKind, name: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
        }
    }
}

/// Payload for registering a new location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationCreate {
    pub kind: LocationKind,
    pub name: String,
}

impl LocationCreate {
    pub fn restaurant(name: impl Into<String>) -> Self {
        Self { kind: LocationKind::Restaurant, name: name.into() }
    }

    pub fn customer(name: impl Into<String>) -> Self {
        Self { kind: LocationKind::Customer, name: name.into() }
    }

    pub fn charging_station(name: impl Into<String>) -> Self {
        Self { kind: LocationKind::ChargingStation, name: name.into() }
    }
}
