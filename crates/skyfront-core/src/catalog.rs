//! Static type catalogs: aircraft and location definitions.
//!
//! Catalogs are loaded once before the campaign starts and never mutated.
//! Names are resolved to typed ids at load time; the simulation only ever
//! looks entries up by id.

use serde::{Deserialize, Serialize};

use crate::enums::{AircraftCategory, LocationCategory};

/// Stable key for an aircraft type, valid for the catalog that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AircraftTypeId(pub u32);

/// Stable key for a location type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationTypeId(pub u32);

/// Immutable performance and combat definition for one aircraft type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AircraftTypeDef {
    pub category: AircraftCategory,
    pub name: String,
    // Performance
    /// Maximum speed (km/h).
    pub max_speed: f64,
    /// Cruising speed (km/h), the basis for mission speed.
    pub cruise_speed: f64,
    /// Service ceiling (m).
    pub max_altitude: f64,
    /// Range (km); also the per-aircraft fuel capacity.
    pub range: f64,
    /// Fuel burned per aircraft per hour of flight.
    pub fuel_consumption: f64,
    // Combat
    pub attack_power: i32,
    pub defense_power: i32,
    /// Ordnance capacity per aircraft (tonnes).
    pub bomb_capacity: f64,
    /// Bombing accuracy, 0.0–1.0.
    pub accuracy: f64,
    // Logistics
    pub crew_required: u32,
    pub maintenance_cost: u32,
    pub production_cost: u32,
}

/// Immutable definition for one location type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationTypeDef {
    pub category: LocationCategory,
    pub display_name: String,
    pub can_launch_aircraft: bool,
    pub can_repair_aircraft: bool,
    pub defense_value: i32,
    pub strategic_value: i32,
}

/// Read-only registry of aircraft and location types.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticCatalog {
    aircraft: Vec<AircraftTypeDef>,
    locations: Vec<LocationTypeDef>,
}

impl StaticCatalog {
    pub fn new(aircraft: Vec<AircraftTypeDef>, locations: Vec<LocationTypeDef>) -> Self {
        Self {
            aircraft,
            locations,
        }
    }

    pub fn aircraft(&self, id: AircraftTypeId) -> Option<&AircraftTypeDef> {
        self.aircraft.get(id.0 as usize)
    }

    pub fn location_type(&self, id: LocationTypeId) -> Option<&LocationTypeDef> {
        self.locations.get(id.0 as usize)
    }

    /// Resolve an aircraft type by name. Setup-time only.
    pub fn aircraft_id_by_name(&self, name: &str) -> Option<AircraftTypeId> {
        self.aircraft
            .iter()
            .position(|def| def.name == name)
            .map(|i| AircraftTypeId(i as u32))
    }

    /// Resolve the first location type of the given category. Setup-time only.
    pub fn location_type_by_category(&self, category: LocationCategory) -> Option<LocationTypeId> {
        self.locations
            .iter()
            .position(|def| def.category == category)
            .map(|i| LocationTypeId(i as u32))
    }

    pub fn aircraft_count(&self) -> usize {
        self.aircraft.len()
    }

    pub fn location_type_count(&self) -> usize {
        self.locations.len()
    }
}
