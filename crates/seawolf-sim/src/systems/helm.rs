//! Helm system — held-key movement, dive/surface transitions, and the
//! submarine's per-tick timers.
//!
//! Movement and rotation are fixed per-tick displacements (the arcade
//! feel of the game); the air timer and gun cooldown are second-based
//! and decrement by DT.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use seawolf_core::commands::HelmInput;
use seawolf_core::components::Submarine;
use seawolf_core::constants::*;
use seawolf_core::events::GameEvent;
use seawolf_core::types::Position;

use crate::world_setup;

/// Apply the held-key movement state to the submarine.
pub fn run(world: &mut World, input: HelmInput) {
    for (_entity, (pos, sub)) in world.query_mut::<(&mut Position, &mut Submarine)>() {
        if input.forward {
            let factor = if sub.underwater {
                SUB_SUBMERGED_FORWARD_FACTOR
            } else {
                1.0
            };
            let step = sub.speed * factor;
            pos.x += sub.heading.cos() * step;
            pos.y += sub.heading.sin() * step;
        }
        if input.backward {
            let factor = if sub.underwater {
                SUB_SUBMERGED_BACKWARD_FACTOR
            } else {
                SUB_SURFACED_BACKWARD_FACTOR
            };
            let step = sub.speed * factor;
            pos.x -= sub.heading.cos() * step;
            pos.y -= sub.heading.sin() * step;
        }
        if input.left {
            sub.heading -= SUB_TURN_RATE;
        }
        if input.right {
            sub.heading += SUB_TURN_RATE;
        }
    }
}

/// Tick the submarine's timers: air while submerged (forcing surfacing
/// when it runs out) and the deck gun cooldown.
pub fn tick_submarine(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    player: hecs::Entity,
    events: &mut Vec<GameEvent>,
) {
    let mut out_of_air = false;
    if let Ok(sub) = world.query_one_mut::<&mut Submarine>(player) {
        if sub.underwater {
            sub.dive_timer_secs -= DT;
            if sub.dive_timer_secs <= 0.0 {
                out_of_air = true;
            }
        }
        if sub.gun_cooldown_secs > 0.0 {
            sub.gun_cooldown_secs -= DT;
        }
    }

    if out_of_air {
        surface(world, rng, player, true, events);
    }
}

/// Submerge. No-op while already submerged — the air timer is not reset.
pub fn dive(world: &mut World, player: hecs::Entity, events: &mut Vec<GameEvent>) {
    let splash = match world.query_one_mut::<(&Position, &mut Submarine)>(player) {
        Ok((pos, sub)) if !sub.underwater => {
            sub.underwater = true;
            sub.dive_timer_secs = SUB_AIR_TIME_SECS;
            Some(*pos)
        }
        _ => None,
    };

    if let Some(pos) = splash {
        world_setup::spawn_bubble(world, pos);
        events.push(GameEvent::Submerged);
    }
}

/// Surface. No-op while already surfaced. `forced` marks the air timer
/// running out rather than a player action.
pub fn surface(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    player: hecs::Entity,
    forced: bool,
    events: &mut Vec<GameEvent>,
) {
    let splash = match world.query_one_mut::<(&Position, &mut Submarine)>(player) {
        Ok((pos, sub)) if sub.underwater => {
            sub.underwater = false;
            Some(*pos)
        }
        _ => None,
    };

    if let Some(pos) = splash {
        for _ in 0..SURFACE_BUBBLE_COUNT {
            let offset = rng.gen_range(-0.5..0.5) * SURFACE_BUBBLE_SPREAD;
            world_setup::spawn_bubble(world, Position::new(pos.x + offset, pos.y));
        }
        events.push(GameEvent::Surfaced { forced });
    }
}
