//! Cleanup system: removes entities that are dead, expired, or out of
//! range. Uses a pre-allocated buffer to avoid per-tick allocation.

use hecs::{Entity, World};

use seawolf_core::components::{Effect, Projectile, PursuitBoat, Submarine};
use seawolf_core::constants::PROJECTILE_DESPAWN_RADIUS_SQ;
use seawolf_core::types::Position;

/// Remove dead projectiles and boats, expired effects, and projectiles
/// that have run far beyond the player (despawn-at-distance policy so the
/// unbounded world cannot accumulate runaway torpedoes).
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    let player_pos = {
        let mut query = world.query::<(&Submarine, &Position)>();
        query
            .iter()
            .next()
            .map(|(_, (_, pos))| *pos)
            .unwrap_or_default()
    };

    for (entity, (pos, proj)) in world.query_mut::<(&Position, &Projectile)>() {
        if proj.dead || pos.range_sq_to(&player_pos) > PROJECTILE_DESPAWN_RADIUS_SQ {
            despawn_buffer.push(entity);
        }
    }

    for (entity, boat) in world.query_mut::<&PursuitBoat>() {
        if boat.dead {
            despawn_buffer.push(entity);
        }
    }

    for (entity, effect) in world.query_mut::<&Effect>() {
        if effect.life_secs <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
