//! Snapshot builder — flattens the campaign world into serializable views.

use hecs::World;

use skyfront_core::components::{Location, Position, Squadron};
use skyfront_core::events::{Alert, CampaignEvent};
use skyfront_core::state::{CampaignSnapshot, LocationView, SquadronView, TurnStatus};
use skyfront_core::types::Orientation;

/// Build the complete snapshot for the frontend. Views are sorted by id
/// so equal states serialize identically regardless of world iteration
/// order.
pub fn build_snapshot(
    world: &World,
    status: TurnStatus,
    events: Vec<CampaignEvent>,
    alerts: Vec<Alert>,
) -> CampaignSnapshot {
    let mut locations: Vec<LocationView> = world
        .query::<&Location>()
        .iter()
        .map(|(_entity, loc)| LocationView {
            id: loc.id,
            name: loc.name.clone(),
            country_code: loc.country_code.clone(),
            geo: loc.geo,
            health: loc.health,
            max_health: loc.max_health,
            operational: loc.operational,
            occupied: loc.occupied,
            controlled_by: loc.controlled_by,
            stocks: loc.stocks,
        })
        .collect();
    locations.sort_by_key(|view| view.id.0);

    let mut squadrons: Vec<SquadronView> = world
        .query::<(&Squadron, &Position)>()
        .iter()
        .map(|(_entity, (sq, pos))| {
            let orientation = sq
                .waypoints
                .get(sq.waypoint_index)
                .map(|wp| Orientation::at(pos.0, *wp))
                .unwrap_or_default();
            SquadronView {
                id: sq.id,
                name: sq.name.clone(),
                side: sq.side,
                aircraft_count: sq.aircraft_count,
                fuel: sq.fuel,
                max_fuel: sq.max_fuel,
                bomb_load: sq.bomb_load,
                readiness: sq.readiness,
                experience: sq.experience,
                on_mission: sq.on_mission,
                position: pos.0,
                orientation,
                home_base: sq.home_base,
                target: sq.target,
            }
        })
        .collect();
    squadrons.sort_by_key(|view| view.id.0);

    CampaignSnapshot {
        status,
        locations,
        squadrons,
        events,
        alerts,
    }
}
