//! Phase entry actions: Planning readiness refresh and Resolution repair.

use hecs::World;

use skyfront_core::components::{Location, Squadron};
use skyfront_core::constants::{PLANNING_READINESS_GAIN, REPAIR_PER_TURN};
use skyfront_core::enums::Side;
use skyfront_core::events::CampaignEvent;

/// Planning entry: squadrons of the active side that are parked at base
/// recover a little readiness.
pub fn refresh_readiness(world: &mut World, side: Side) {
    for (_entity, sq) in world.query_mut::<&mut Squadron>() {
        if sq.side == side && !sq.on_mission {
            sq.gain_readiness(PLANNING_READINESS_GAIN);
        }
    }
}

/// Resolution entry: every damaged location controlled by the side whose
/// turn is ending receives a fixed repair amount.
pub fn repair_controlled_locations(world: &mut World, side: Side, events: &mut Vec<CampaignEvent>) {
    for (_entity, loc) in world.query_mut::<&mut Location>() {
        if loc.controlled_by == Some(side) && loc.health < loc.max_health {
            loc.repair(REPAIR_PER_TURN);
            events.push(CampaignEvent::LocationRepaired {
                location: loc.id,
                health: loc.health,
            });
        }
    }
}
