//! Campaign setup specs — the external configuration consumed by
//! `CampaignEngine::start_campaign`.
//!
//! Specs name catalog entries and bases by string; the engine resolves
//! every name to a typed id up front and rejects the whole setup on the
//! first inconsistency, so a failed start never leaves a half-built world.

use serde::{Deserialize, Serialize};

use skyfront_core::components::ResourceStocks;
use skyfront_core::enums::{LocationCategory, Side};

/// One map site to create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationSpec {
    pub name: String,
    pub category: LocationCategory,
    pub country_code: String,
    pub lat_deg: f64,
    pub lon_deg: f64,
    pub elevation_m: f64,
    pub controlled_by: Option<Side>,
    pub max_health: i32,
    pub stocks: ResourceStocks,
}

/// One squadron to create, parked at its home base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SquadronSpec {
    pub name: String,
    /// Catalog aircraft type name, resolved at setup.
    pub aircraft_type: String,
    /// Home base location name; must appear in the location list.
    pub home_base: String,
    pub side: Side,
    pub aircraft_count: u32,
    /// Ordnance loaded at start (tonnes); clamped to type capacity × count.
    pub bomb_load: f64,
    pub ammunition: i32,
    pub readiness: f64,
    pub experience: i32,
    /// Nominal flight altitude (m).
    pub altitude_m: f64,
}

/// Everything needed to populate a fresh campaign world.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CampaignSetup {
    pub locations: Vec<LocationSpec>,
    pub squadrons: Vec<SquadronSpec>,
}
