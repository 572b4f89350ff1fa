//! Weapon systems — torpedo and deck gun launch handling.
//!
//! Both fire paths decline as no-ops when unavailable (empty tubes,
//! cooldown, submerged gun) and return `None`.

use glam::DVec2;
use hecs::World;

use seawolf_core::components::{Projectile, Submarine, TorpedoTubes};
use seawolf_core::constants::*;
use seawolf_core::enums::ProjectileKind;
use seawolf_core::events::GameEvent;
use seawolf_core::types::Position;

use crate::world_setup;

/// Fire a torpedo at a point in viewport space.
///
/// The aim direction runs from the viewport center (where the player is
/// drawn) toward the target. A click exactly on the center would make the
/// direction degenerate; it falls back to the current heading instead.
pub fn fire_torpedo(
    world: &mut World,
    player: hecs::Entity,
    target_x: f64,
    target_y: f64,
    viewport_width: f64,
    viewport_height: f64,
    events: &mut Vec<GameEvent>,
) -> Option<hecs::Entity> {
    let launch = match world.query_one_mut::<(&Position, &Submarine, &mut TorpedoTubes)>(player) {
        Ok((pos, sub, tubes)) if tubes.loaded > 0 => {
            tubes.loaded -= 1;
            let aim = DVec2::new(
                target_x - viewport_width / 2.0,
                target_y - viewport_height / 2.0,
            );
            let dir = aim
                .try_normalize()
                .unwrap_or_else(|| DVec2::new(sub.heading.cos(), sub.heading.sin()));
            Some((*pos, dir, tubes.loaded))
        }
        _ => None,
    };

    let (pos, dir, remaining) = launch?;
    world_setup::spawn_bubble(world, pos);
    let entity = world.spawn((
        pos,
        Projectile {
            kind: ProjectileKind::Torpedo,
            dir_x: dir.x,
            dir_y: dir.y,
            speed: TORPEDO_SPEED,
            dead: false,
        },
    ));
    events.push(GameEvent::TorpedoAway { remaining });
    Some(entity)
}

/// Fire the deck gun along the current heading.
/// Declines while reloading or submerged.
pub fn fire_deck_gun(
    world: &mut World,
    player: hecs::Entity,
    events: &mut Vec<GameEvent>,
) -> Option<hecs::Entity> {
    let launch = match world.query_one_mut::<(&Position, &mut Submarine)>(player) {
        Ok((pos, sub)) if sub.gun_cooldown_secs <= 0.0 && !sub.underwater => {
            sub.gun_cooldown_secs = DECK_GUN_COOLDOWN_SECS;
            let dir = DVec2::new(sub.heading.cos(), sub.heading.sin());
            Some((*pos, dir))
        }
        _ => None,
    };

    let (pos, dir) = launch?;
    let muzzle = Position::new(pos.x + dir.x * MUZZLE_OFFSET, pos.y + dir.y * MUZZLE_OFFSET);
    world_setup::spawn_explosion(world, muzzle);
    let entity = world.spawn((
        pos,
        Projectile {
            kind: ProjectileKind::DeckShell,
            dir_x: dir.x,
            dir_y: dir.y,
            speed: SHELL_SPEED,
            dead: false,
        },
    ));
    events.push(GameEvent::ShellAway);
    Some(entity)
}
