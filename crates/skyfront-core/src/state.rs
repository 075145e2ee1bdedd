//! Campaign state snapshot — the read-only view handed to the frontend.

use chrono::NaiveDate;
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::components::{LocationId, ResourceStocks, SquadronId};
use crate::enums::*;
use crate::events::{Alert, CampaignEvent};
use crate::types::{GeoPos, Orientation};

/// The `describe()` surface: turn, date, phase, side, weather.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnStatus {
    pub turn: u32,
    pub date: NaiveDate,
    pub phase: GamePhase,
    pub side: Side,
    pub weather: WeatherCondition,
}

impl TurnStatus {
    /// Human-readable one-line summary for a status bar.
    pub fn summary(&self) -> String {
        format!(
            "Turn {} - {} | Phase: {:?} | Side: {:?} | Weather: {:?}",
            self.turn, self.date, self.phase, self.side, self.weather
        )
    }
}

/// Complete campaign state broadcast to the frontend after each advance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignSnapshot {
    pub status: TurnStatus,
    pub locations: Vec<LocationView>,
    pub squadrons: Vec<SquadronView>,
    pub events: Vec<CampaignEvent>,
    pub alerts: Vec<Alert>,
}

/// A visible map site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationView {
    pub id: LocationId,
    pub name: String,
    pub country_code: String,
    pub geo: GeoPos,
    pub health: i32,
    pub max_health: i32,
    pub operational: bool,
    pub occupied: bool,
    pub controlled_by: Option<Side>,
    pub stocks: ResourceStocks,
}

/// A visible squadron.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SquadronView {
    pub id: SquadronId,
    pub name: String,
    pub side: Side,
    pub aircraft_count: u32,
    pub fuel: f64,
    pub max_fuel: f64,
    pub bomb_load: f64,
    pub readiness: f64,
    pub experience: i32,
    pub on_mission: bool,
    pub position: DVec3,
    pub orientation: Orientation,
    pub home_base: LocationId,
    pub target: Option<LocationId>,
}
