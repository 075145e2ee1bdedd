//! ECS components for hecs entities.
//!
//! Locations and squadrons live in the campaign world for the whole
//! session; neither is ever despawned, only deactivated. The mutators
//! here are the single place health/readiness invariants are enforced.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::catalog::{AircraftTypeId, LocationTypeId};
use crate::constants::{CAN_FLY_READINESS, READINESS_MAX};
use crate::enums::Side;
use crate::types::GeoPos;

/// Stable identity of a location, assigned at campaign setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationId(pub u32);

/// Stable identity of a squadron, assigned at campaign setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SquadronId(pub u32);

/// Cartesian position on (or above) the sphere, km.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec3);

/// Consumable stores held at a location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceStocks {
    pub fuel: i32,
    pub ammunition: i32,
    pub supplies: i32,
}

/// A map site: airfield, city, factory, port...
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub type_id: LocationTypeId,
    /// ISO-style country tag ("UK", "DE", "FR").
    pub country_code: String,
    pub geo: GeoPos,
    pub health: i32,
    pub max_health: i32,
    /// False exactly while health is zero.
    pub operational: bool,
    pub occupied: bool,
    pub controlled_by: Option<Side>,
    pub stocks: ResourceStocks,
}

impl Location {
    /// Subtract `amount` from health, clamped at zero. A location at zero
    /// health goes non-operational but is never removed from the map.
    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount.max(0)).max(0);
        if self.health == 0 {
            self.operational = false;
        }
    }

    /// Restore `amount` health, clamped at max. Repairing above zero
    /// brings a knocked-out location back into operation.
    pub fn repair(&mut self, amount: i32) {
        self.health = (self.health + amount.max(0)).min(self.max_health);
        if self.health > 0 && !self.operational {
            self.operational = true;
        }
    }
}

/// A squadron of aircraft of a single type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Squadron {
    pub id: SquadronId,
    pub name: String,
    pub type_id: AircraftTypeId,
    pub side: Side,
    pub aircraft_count: u32,
    // Stores
    pub fuel: f64,
    /// Full tank: type range × aircraft count.
    pub max_fuel: f64,
    pub ammunition: i32,
    /// Ordnance currently carried; zeroed after a strike.
    pub bomb_load: f64,
    /// Crew readiness, 0–100.
    pub readiness: f64,
    /// Crew experience, never decreases.
    pub experience: i32,
    // Mission
    pub home_base: LocationId,
    pub target: Option<LocationId>,
    /// Flight altitude (m).
    pub altitude: f64,
    pub on_mission: bool,
    pub waypoints: Vec<DVec3>,
    pub waypoint_index: usize,
    /// Mission speed (km/h), derived once at mission start.
    pub mission_speed: f64,
}

impl Squadron {
    /// Whether this squadron may be assigned a new mission.
    pub fn can_fly(&self) -> bool {
        self.readiness > CAN_FLY_READINESS && self.fuel > 0.0 && self.aircraft_count > 0
    }

    /// Raise readiness by `amount`, capped at 100.
    pub fn gain_readiness(&mut self, amount: f64) {
        self.readiness = (self.readiness + amount).min(READINESS_MAX);
    }

    /// Clear mission state and park the squadron.
    pub fn stand_down(&mut self) {
        self.on_mission = false;
        self.target = None;
        self.waypoints.clear();
        self.waypoint_index = 0;
    }
}
