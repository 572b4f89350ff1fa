//! Collision resolution — pairwise projectile-boat proximity tests.
//!
//! Pairwise O(boats × projectiles) per tick; fine at this game's scale
//! (tens of entities). Thresholds are compared in squared distance.
//! Entities marked dead earlier in the tick still participate — they are
//! pruned by cleanup before the next tick, matching the one-pass pair
//! semantics of the resolver.

use hecs::World;

use seawolf_core::components::{Projectile, PursuitBoat};
use seawolf_core::constants::{HIT_RADIUS_SQ, SCRAP_PER_KILL, SHELL_KILL_SCORE, TORPEDO_KILL_SCORE};
use seawolf_core::enums::ProjectileKind;
use seawolf_core::events::GameEvent;
use seawolf_core::types::Position;

use crate::engine::ScoreState;
use crate::world_setup;

/// Resolve all projectile-boat hits, awarding score and scrap.
pub fn run(world: &mut World, score: &mut ScoreState, events: &mut Vec<GameEvent>) {
    let boats: Vec<(hecs::Entity, Position)> = {
        let mut query = world.query::<(&Position, &PursuitBoat)>();
        query.iter().map(|(entity, (pos, _))| (entity, *pos)).collect()
    };

    let mut hits: Vec<(hecs::Entity, Position, ProjectileKind)> = Vec::new();

    for (_entity, (pos, proj)) in world.query_mut::<(&Position, &mut Projectile)>() {
        for &(boat_entity, boat_pos) in &boats {
            if pos.range_sq_to(&boat_pos) < HIT_RADIUS_SQ {
                proj.dead = true;
                hits.push((boat_entity, boat_pos, proj.kind));
            }
        }
    }

    for (boat_entity, boat_pos, kind) in hits {
        if let Ok(boat) = world.query_one_mut::<&mut PursuitBoat>(boat_entity) {
            boat.dead = true;
        }
        score.score += match kind {
            ProjectileKind::Torpedo => TORPEDO_KILL_SCORE,
            ProjectileKind::DeckShell => SHELL_KILL_SCORE,
        };
        score.scrap += SCRAP_PER_KILL;
        world_setup::spawn_explosion(world, boat_pos);
        events.push(GameEvent::BoatDestroyed {
            x: boat_pos.x,
            y: boat_pos.y,
            kind,
        });
    }
}
