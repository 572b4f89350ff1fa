//! Projectile advance system.
//!
//! Torpedoes and shells move `dir * speed` per tick. Torpedoes leave a
//! wake bubble at their new position each tick.

use hecs::World;

use seawolf_core::components::Projectile;
use seawolf_core::enums::ProjectileKind;
use seawolf_core::types::Position;

use crate::world_setup;

/// Advance all projectiles and spawn torpedo wakes.
pub fn run(world: &mut World) {
    // Wakes are buffered to avoid spawning while a query borrow is live.
    let mut wakes: Vec<Position> = Vec::new();

    for (_entity, (pos, proj)) in world.query_mut::<(&mut Position, &Projectile)>() {
        pos.x += proj.dir_x * proj.speed;
        pos.y += proj.dir_y * proj.speed;
        if proj.kind == ProjectileKind::Torpedo {
            wakes.push(*pos);
        }
    }

    for pos in wakes {
        world_setup::spawn_bubble(world, pos);
    }
}
