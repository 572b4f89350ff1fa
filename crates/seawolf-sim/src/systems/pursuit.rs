//! Pursuit system — boats close directly on the player and ram when the
//! player is surfaced.
//!
//! The contact test uses the range before this tick's movement, and each
//! boat deals its damage exactly once: a ram kills the boat with it.

use hecs::World;

use seawolf_core::components::{Health, PursuitBoat, Submarine};
use seawolf_core::constants::{CONTACT_DAMAGE, CONTACT_RADIUS_SQ};
use seawolf_core::events::GameEvent;
use seawolf_core::types::Position;

use crate::world_setup;

/// Run boat pursuit and suicide-contact resolution.
pub fn run(world: &mut World, player: hecs::Entity, events: &mut Vec<GameEvent>) {
    let (player_pos, underwater) = match world.query_one_mut::<(&Position, &Submarine)>(player) {
        Ok((pos, sub)) => (*pos, sub.underwater),
        Err(_) => return,
    };

    let mut rams: u32 = 0;
    let mut blasts: Vec<Position> = Vec::new();

    for (_entity, (pos, boat)) in world.query_mut::<(&mut Position, &mut PursuitBoat)>() {
        let range_sq = pos.range_sq_to(&player_pos);

        // A boat exactly on the player has no defined direction; it holds
        // position (the contact rule below still applies at range zero).
        if let Some(dir) = pos.direction_to(&player_pos) {
            pos.advance(dir, boat.speed);
        }

        if !underwater && range_sq < CONTACT_RADIUS_SQ {
            boat.dead = true;
            rams += 1;
            blasts.push(*pos);
        }
    }

    if rams > 0 {
        if let Ok(health) = world.query_one_mut::<&mut Health>(player) {
            for _ in 0..rams {
                health.current = health.current.saturating_sub(CONTACT_DAMAGE);
                events.push(GameEvent::HullHit {
                    damage: CONTACT_DAMAGE,
                });
            }
        }
        for pos in blasts {
            world_setup::spawn_explosion(world, pos);
        }
    }
}
