//! Entity spawn factories for setting up the simulation world.

use hecs::World;

use seawolf_core::components::{Effect, Health, Submarine, TorpedoTubes};
use seawolf_core::constants::*;
use seawolf_core::enums::EffectKind;
use seawolf_core::types::Position;

/// Spawn the player's submersible at the origin, surfaced, fully stocked.
pub fn spawn_submarine(world: &mut World) -> hecs::Entity {
    world.spawn((
        Position::default(),
        Submarine {
            heading: 0.0,
            speed: SUB_BASE_SPEED,
            underwater: false,
            dive_timer_secs: 0.0,
            gun_cooldown_secs: 0.0,
        },
        Health {
            current: SUB_MAX_HEALTH,
            max: SUB_MAX_HEALTH,
        },
        TorpedoTubes {
            loaded: SUB_TORPEDO_CAPACITY,
            capacity: SUB_TORPEDO_CAPACITY,
        },
    ))
}

/// Spawn a rising air bubble.
pub fn spawn_bubble(world: &mut World, position: Position) -> hecs::Entity {
    world.spawn((
        position,
        Effect {
            kind: EffectKind::Bubble,
            life_secs: BUBBLE_LIFE_SECS,
            max_life_secs: BUBBLE_LIFE_SECS,
        },
    ))
}

/// Spawn an explosion blast.
pub fn spawn_explosion(world: &mut World, position: Position) -> hecs::Entity {
    world.spawn((
        position,
        Effect {
            kind: EffectKind::Explosion,
            life_secs: EXPLOSION_LIFE_SECS,
            max_life_secs: EXPLOSION_LIFE_SECS,
        },
    ))
}
