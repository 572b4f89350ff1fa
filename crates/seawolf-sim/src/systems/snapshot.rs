//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use seawolf_core::components::{Effect, Health, Projectile, PursuitBoat, Submarine, TorpedoTubes};
use seawolf_core::enums::{GamePhase, ProjectileKind};
use seawolf_core::events::GameEvent;
use seawolf_core::state::*;
use seawolf_core::types::{Position, SimTime};

use crate::engine::ScoreState;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    score: &ScoreState,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let (torpedoes, shells) = build_projectiles(world);

    GameStateSnapshot {
        time: *time,
        phase,
        submarine: build_submarine(world),
        torpedoes,
        shells,
        boats: build_boats(world),
        effects: build_effects(world),
        hud: build_hud(world, score),
        events,
    }
}

/// Build the player view.
fn build_submarine(world: &World) -> SubmarineView {
    world
        .query::<(&Submarine, &Position)>()
        .iter()
        .next()
        .map(|(_, (sub, pos))| SubmarineView {
            position: *pos,
            heading: sub.heading,
            underwater: sub.underwater,
            dive_timer_secs: sub.dive_timer_secs,
            gun_cooldown_secs: sub.gun_cooldown_secs,
        })
        .unwrap_or_default()
}

/// Build projectile views, split by kind for the renderer.
fn build_projectiles(world: &World) -> (Vec<ProjectileView>, Vec<ProjectileView>) {
    let mut torpedoes = Vec::new();
    let mut shells = Vec::new();

    for (_, (pos, proj)) in world.query::<(&Position, &Projectile)>().iter() {
        let view = ProjectileView {
            position: *pos,
            heading: proj.dir_y.atan2(proj.dir_x),
            kind: proj.kind,
        };
        match proj.kind {
            ProjectileKind::Torpedo => torpedoes.push(view),
            ProjectileKind::DeckShell => shells.push(view),
        }
    }

    (torpedoes, shells)
}

/// Build boat views.
fn build_boats(world: &World) -> Vec<BoatView> {
    world
        .query::<(&Position, &PursuitBoat)>()
        .iter()
        .map(|(_, (pos, boat))| BoatView {
            position: *pos,
            speed: boat.speed,
        })
        .collect()
}

/// Build effect views with the remaining-life fraction for fade-out.
fn build_effects(world: &World) -> Vec<EffectView> {
    world
        .query::<(&Position, &Effect)>()
        .iter()
        .map(|(_, (pos, effect))| EffectView {
            position: *pos,
            kind: effect.kind,
            life_frac: (effect.life_secs / effect.max_life_secs).max(0.0),
        })
        .collect()
}

/// Build the HUD values.
fn build_hud(world: &World, score: &ScoreState) -> HudView {
    world
        .query::<(&Submarine, &Health, &TorpedoTubes)>()
        .iter()
        .next()
        .map(|(_, (_, health, tubes))| HudView {
            health: health.current,
            max_health: health.max,
            torpedoes: tubes.loaded,
            max_torpedoes: tubes.capacity,
            scrap: score.scrap,
            wave: score.wave,
            score: score.score,
        })
        .unwrap_or_default()
}
