//! Events emitted by the simulation for the UI layer.
//!
//! One-way observations: the engine buffers them each tick and the
//! consumer drains them with the next snapshot. Nothing in the core
//! waits on acknowledgment.

use chrono::NaiveDate;
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::components::{LocationId, SquadronId};
use crate::enums::*;
use crate::types::Orientation;

/// Campaign events for the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CampaignEvent {
    /// A new turn has begun.
    TurnStarted { turn: u32, date: NaiveDate },
    /// Both sides have played; the turn counter is about to advance.
    TurnEnded { turn: u32 },
    /// The controller moved to a new phase.
    PhaseChanged { phase: GamePhase, side: Side },
    /// Weather rerolled for the new turn.
    WeatherChanged { weather: WeatherCondition },
    /// A squadron was ordered onto a mission.
    MissionAssigned {
        squadron: SquadronId,
        target: LocationId,
    },
    /// Per-tick position/orientation update for a squadron in flight.
    SquadronMoved {
        squadron: SquadronId,
        position: DVec3,
        orientation: Orientation,
    },
    /// A strike was delivered against a location.
    AttackResolved {
        squadron: SquadronId,
        target: LocationId,
        damage: i32,
    },
    /// Location health dropped.
    LocationDamaged {
        location: LocationId,
        health: i32,
        operational: bool,
    },
    /// Location health restored during Resolution.
    LocationRepaired { location: LocationId, health: i32 },
    /// Mission aborted in flight (fuel exhaustion); squadron is cutting
    /// straight for home.
    MissionAborted { squadron: SquadronId },
    /// Squadron landed at its home base and refueled.
    SquadronLanded { squadron: SquadronId },
    /// Waypoint plan ran out somewhere that is neither home nor target;
    /// the squadron stopped with no further effect.
    MissionStopped { squadron: SquadronId },
}

/// Notice for the UI alert queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    pub turn: u32,
}
