//! Enumeration types used throughout the campaign simulation.

use serde::{Deserialize, Serialize};

/// One of the two opposing factions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[default]
    Allies,
    Axis,
}

impl Side {
    /// The other faction.
    pub fn opponent(self) -> Side {
        match self {
            Side::Allies => Side::Axis,
            Side::Axis => Side::Allies,
        }
    }
}

/// Sequential stage within a side's portion of a turn.
///
/// Cycles Planning → Movement → Combat → Resolution; Resolution hands
/// over to the other side's Planning, or ends the turn once both sides
/// have played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Planning,
    Movement,
    Combat,
    Resolution,
}

/// Weather for the current turn, rerolled once per new turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherCondition {
    #[default]
    Clear,
    Cloudy,
    Rainy,
    Stormy,
    Foggy,
}

/// Aircraft role category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AircraftCategory {
    Fighter,
    Bomber,
    Recon,
    Transport,
    NightFighter,
    Escort,
}

/// Map site category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationCategory {
    Airfield,
    City,
    Factory,
    Port,
    Radar,
    AntiAir,
    SupplyDepot,
}

/// Alert severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertLevel {
    Info,
    Warning,
}
