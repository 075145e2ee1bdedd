//! Mission simulator — advances every squadron in flight by one tick.
//!
//! Per tick a squadron chases its current waypoint at the mission speed
//! cached at launch, burns fuel, and on running out of waypoints is
//! dispatched to the completion logic: land at home, strike the target,
//! or stop. Fuel exhaustion aborts the mission with a direct cut back
//! to base — a recoverable condition, not an error.

use std::collections::HashMap;

use glam::DVec3;
use hecs::{Entity, World};

use skyfront_core::catalog::StaticCatalog;
use skyfront_core::components::{Location, LocationId, Position, Squadron};
use skyfront_core::constants::{ARRIVAL_TOLERANCE_KM, TICK_HOURS, WAYPOINT_SPACING_DEG};
use skyfront_core::enums::AlertLevel;
use skyfront_core::events::{Alert, CampaignEvent};
use skyfront_core::types::Orientation;

use crate::path;

/// Result of one mission tick across the whole world.
#[derive(Debug, Default)]
pub struct MissionTick {
    /// Whether any squadron is still flying. False means the phase is
    /// quiescent.
    pub any_active: bool,
    /// Strikes to resolve this tick: (attacker entity, target location).
    pub strikes: Vec<(Entity, LocationId)>,
}

/// Step every on-mission squadron by one tick.
///
/// Locations are read-only here; strikes are returned to the caller so
/// location damage stays serialized in the combat resolver.
pub fn run(
    world: &mut World,
    catalog: &StaticCatalog,
    events: &mut Vec<CampaignEvent>,
    alerts: &mut Vec<Alert>,
    turn: u32,
) -> MissionTick {
    // Location positions, fixed for the duration of the tick.
    let site_positions: HashMap<LocationId, DVec3> = world
        .query_mut::<(&Location, &Position)>()
        .into_iter()
        .map(|(_entity, (loc, pos))| (loc.id, pos.0))
        .collect();

    let mut outcome = MissionTick::default();

    for (entity, (sq, pos)) in world.query_mut::<(&mut Squadron, &mut Position)>() {
        if !sq.on_mission {
            continue;
        }

        if sq.waypoint_index >= sq.waypoints.len() {
            complete_mission(entity, sq, pos, &site_positions, &mut outcome, events);
        } else {
            move_along_waypoints(sq, pos, events);
            consume_fuel(sq, pos, catalog, &site_positions, events, alerts, turn);
        }

        if sq.on_mission {
            outcome.any_active = true;
        }
    }

    outcome
}

/// The waypoint plan is exhausted: home, target, or dead end.
fn complete_mission(
    entity: Entity,
    sq: &mut Squadron,
    pos: &Position,
    site_positions: &HashMap<LocationId, DVec3>,
    outcome: &mut MissionTick,
    events: &mut Vec<CampaignEvent>,
) {
    let home_pos = site_positions.get(&sq.home_base).copied();

    // Back at base: refuel, rest, stand down.
    if let Some(home) = home_pos {
        if pos.0.distance(home) < ARRIVAL_TOLERANCE_KM {
            sq.stand_down();
            sq.fuel = sq.max_fuel;
            sq.gain_readiness(skyfront_core::constants::LANDING_READINESS_GAIN);
            events.push(CampaignEvent::SquadronLanded { squadron: sq.id });
            return;
        }
    }

    // Over the target: deliver the strike, then fly the return leg.
    if let (Some(target_id), Some(home)) = (sq.target, home_pos) {
        if target_id != sq.home_base {
            if let Some(target_pos) = site_positions.get(&target_id) {
                if pos.0.distance(*target_pos) < ARRIVAL_TOLERANCE_KM {
                    outcome.strikes.push((entity, target_id));
                    sq.waypoints = path::plan_route(pos.0, home, WAYPOINT_SPACING_DEG);
                    sq.waypoint_index = 0;
                    return;
                }
            }
        }
    }

    // Neither home nor target. Stop where we are, no attack, no refuel.
    sq.on_mission = false;
    events.push(CampaignEvent::MissionStopped { squadron: sq.id });
}

/// Chase the current waypoint, snapping onto it when the tick's travel
/// distance covers the remainder.
fn move_along_waypoints(sq: &mut Squadron, pos: &mut Position, events: &mut Vec<CampaignEvent>) {
    let waypoint = sq.waypoints[sq.waypoint_index];
    let travel = sq.mission_speed * TICK_HOURS;
    let remaining = pos.0.distance(waypoint);

    if travel >= remaining {
        pos.0 = waypoint;
        sq.waypoint_index += 1;
    } else {
        let direction = (waypoint - pos.0).normalize_or_zero();
        pos.0 += direction * travel;
    }

    // Heading for consumers that render or steer a camera.
    let toward = sq
        .waypoints
        .get(sq.waypoint_index)
        .copied()
        .unwrap_or(waypoint);
    events.push(CampaignEvent::SquadronMoved {
        squadron: sq.id,
        position: pos.0,
        orientation: Orientation::at(pos.0, toward),
    });
}

/// Burn fuel for this tick; hitting empty aborts the mission with a
/// single-point path straight home (no great-circle replanning).
fn consume_fuel(
    sq: &mut Squadron,
    pos: &Position,
    catalog: &StaticCatalog,
    site_positions: &HashMap<LocationId, DVec3>,
    events: &mut Vec<CampaignEvent>,
    alerts: &mut Vec<Alert>,
    turn: u32,
) {
    if sq.fuel <= 0.0 {
        return;
    }
    let Some(def) = catalog.aircraft(sq.type_id) else {
        return;
    };

    sq.fuel -= def.fuel_consumption * sq.aircraft_count as f64 * TICK_HOURS;
    if sq.fuel > 0.0 {
        return;
    }
    sq.fuel = 0.0;

    match site_positions.get(&sq.home_base) {
        Some(home) if pos.0.distance(*home) >= ARRIVAL_TOLERANCE_KM => {
            sq.waypoints = vec![*home];
            sq.waypoint_index = 0;
        }
        Some(_) => {
            // Already over the base; let completion land it.
            sq.waypoints.clear();
            sq.waypoint_index = 0;
        }
        None => {
            // No home to limp back to.
            sq.on_mission = false;
        }
    }
    events.push(CampaignEvent::MissionAborted { squadron: sq.id });
    alerts.push(Alert {
        level: AlertLevel::Warning,
        message: format!("{} out of fuel, aborting mission", sq.name),
        turn,
    });
}
