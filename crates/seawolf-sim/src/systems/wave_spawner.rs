//! Wave spawning system — a new, larger wave whenever the sea is clear.
//!
//! Wave N is `5N` boats at speed `1 + 0.2(N-1)`, placed just beyond a
//! uniformly random viewport edge relative to the player. Clearing a wave
//! repairs part of the hull and refills the torpedo tubes.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use seawolf_core::components::{Health, PursuitBoat, TorpedoTubes};
use seawolf_core::constants::*;
use seawolf_core::events::GameEvent;
use seawolf_core::types::Position;

use crate::engine::ScoreState;

/// Spawn one wave of boats around the player.
pub fn spawn_wave(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    wave: u32,
    player_pos: Position,
    viewport_width: f64,
    viewport_height: f64,
) {
    let count = BOATS_PER_WAVE * wave;
    let speed = BOAT_BASE_SPEED + BOAT_SPEED_PER_WAVE * f64::from(wave - 1);

    for _ in 0..count {
        let side: u8 = rng.gen_range(0..4);
        let (x, y) = match side {
            // Left / right: offset past the horizontal edge, scattered
            // across the vertical extent (and vice versa below).
            0 => (
                player_pos.x - viewport_width / 2.0 - SPAWN_EDGE_OFFSET,
                player_pos.y + rng.gen_range(-0.5..0.5) * viewport_height,
            ),
            1 => (
                player_pos.x + viewport_width / 2.0 + SPAWN_EDGE_OFFSET,
                player_pos.y + rng.gen_range(-0.5..0.5) * viewport_height,
            ),
            2 => (
                player_pos.x + rng.gen_range(-0.5..0.5) * viewport_width,
                player_pos.y - viewport_height / 2.0 - SPAWN_EDGE_OFFSET,
            ),
            _ => (
                player_pos.x + rng.gen_range(-0.5..0.5) * viewport_width,
                player_pos.y + viewport_height / 2.0 + SPAWN_EDGE_OFFSET,
            ),
        };
        world.spawn((Position::new(x, y), PursuitBoat { speed, dead: false }));
    }
}

/// Wave-clear check: when no boats remain, advance the wave counter,
/// resupply the player, and spawn the next wave.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    score: &mut ScoreState,
    player: hecs::Entity,
    viewport_width: f64,
    viewport_height: f64,
    events: &mut Vec<GameEvent>,
) {
    let boats_remaining = {
        let mut query = world.query::<&PursuitBoat>();
        query.iter().count()
    };
    if boats_remaining > 0 {
        return;
    }

    score.wave += 1;

    let player_pos = match world.query_one_mut::<(&Position, &mut Health, &mut TorpedoTubes)>(player)
    {
        Ok((pos, health, tubes)) => {
            health.current = (health.current + WAVE_CLEAR_REPAIR).min(health.max);
            tubes.loaded = tubes.capacity;
            *pos
        }
        Err(_) => Position::default(),
    };

    spawn_wave(
        world,
        rng,
        score.wave,
        player_pos,
        viewport_width,
        viewport_height,
    );
    events.push(GameEvent::WaveCleared { wave: score.wave });
}
