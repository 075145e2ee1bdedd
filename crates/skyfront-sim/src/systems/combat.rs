//! Combat resolver — applies a squadron's strike to a location.
//!
//! Damage model: `round(attack_power × bomb_load × accuracy × (1 +
//! experience/100))`. Bombs are single-use per mission; the crew gains
//! a small seeded experience increment per delivered strike.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyfront_core::catalog::StaticCatalog;
use skyfront_core::components::{Location, Squadron};
use skyfront_core::constants::{STRIKE_EXPERIENCE_MAX, STRIKE_EXPERIENCE_MIN};
use skyfront_core::events::CampaignEvent;

/// Resolve one strike. No-op if the attacker carries no bombs, has no
/// resolvable type, or either entity is gone.
pub fn resolve_attack(
    world: &mut World,
    catalog: &StaticCatalog,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<CampaignEvent>,
    attacker: Entity,
    target: Entity,
) {
    let (damage, squadron_id) = {
        let Ok(mut sq) = world.get::<&mut Squadron>(attacker) else {
            return;
        };
        if sq.bomb_load <= 0.0 {
            return;
        }
        let Some(def) = catalog.aircraft(sq.type_id) else {
            return;
        };

        let accuracy_modifier = def.accuracy * (1.0 + sq.experience as f64 / 100.0);
        let base_damage = def.attack_power as f64 * sq.bomb_load;
        let actual_damage = (base_damage * accuracy_modifier).round() as i32;

        sq.bomb_load = 0.0;
        sq.experience += rng.gen_range(STRIKE_EXPERIENCE_MIN..=STRIKE_EXPERIENCE_MAX);

        (actual_damage, sq.id)
    };

    let Ok(mut loc) = world.get::<&mut Location>(target) else {
        return;
    };
    loc.take_damage(damage);
    events.push(CampaignEvent::AttackResolved {
        squadron: squadron_id,
        target: loc.id,
        damage,
    });
    events.push(CampaignEvent::LocationDamaged {
        location: loc.id,
        health: loc.health,
        operational: loc.operational,
    });
}
