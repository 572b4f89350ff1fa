//! Effect aging system — bubbles rise, everything fades.

use hecs::World;

use seawolf_core::components::Effect;
use seawolf_core::constants::{BUBBLE_RISE_SPEED, DT};
use seawolf_core::enums::EffectKind;
use seawolf_core::types::Position;

/// Age all transient effects. Expired ones are removed by cleanup.
pub fn run(world: &mut World) {
    for (_entity, (pos, effect)) in world.query_mut::<(&mut Position, &mut Effect)>() {
        if effect.kind == EffectKind::Bubble {
            pos.y -= BUBBLE_RISE_SPEED * DT;
        }
        effect.life_secs -= DT;
    }
}
