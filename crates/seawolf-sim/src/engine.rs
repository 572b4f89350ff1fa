//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless
//! (no rendering dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use seawolf_core::commands::{HelmInput, PlayerCommand};
use seawolf_core::components::Health;
use seawolf_core::constants::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};
use seawolf_core::enums::GamePhase;
use seawolf_core::events::GameEvent;
use seawolf_core::state::GameStateSnapshot;
use seawolf_core::types::{Position, SimTime};

use crate::systems;
use crate::world_setup;

/// Configuration for starting a new patrol.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Viewport extent in world units (aim mapping, spawn placement).
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

/// Running score state tracked by the engine.
/// Wave, score, and scrap are all monotonically increasing.
#[derive(Debug, Clone)]
pub struct ScoreState {
    pub wave: u32,
    pub score: u32,
    pub scrap: u32,
}

impl Default for ScoreState {
    fn default() -> Self {
        Self {
            wave: 1,
            score: 0,
            scrap: 0,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    player: hecs::Entity,
    helm: HelmInput,
    viewport_width: f64,
    viewport_height: f64,
    score: ScoreState,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new engine: submarine at the origin, wave 1 inbound.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let player = world_setup::spawn_submarine(&mut world);

        systems::wave_spawner::spawn_wave(
            &mut world,
            &mut rng,
            1,
            Position::default(),
            config.viewport_width,
            config.viewport_height,
        );

        Self {
            world,
            time: SimTime::default(),
            phase: GamePhase::Playing,
            rng,
            player,
            helm: HelmInput::default(),
            viewport_width: config.viewport_width,
            viewport_height: config.viewport_height,
            score: ScoreState::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Playing {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, &self.score, events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a mutable reference to the ECS world (for test setup).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Get the player entity.
    #[cfg(test)]
    pub fn player(&self) -> hecs::Entity {
        self.player
    }

    /// Get a read-only reference to the score state.
    #[cfg(test)]
    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    /// Action commands are ignored once the game is over; invalid actions
    /// (empty tubes, gun on cooldown, dive while submerged) decline silently.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SetHelm { helm } => {
                self.helm = helm;
            }
            PlayerCommand::SetViewport { width, height } => {
                if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
                    self.viewport_width = width;
                    self.viewport_height = height;
                }
            }
            _ if self.phase != GamePhase::Playing => {}
            PlayerCommand::Dive => {
                systems::helm::dive(&mut self.world, self.player, &mut self.events);
            }
            PlayerCommand::Surface => {
                systems::helm::surface(
                    &mut self.world,
                    &mut self.rng,
                    self.player,
                    false,
                    &mut self.events,
                );
            }
            PlayerCommand::FireTorpedo { target_x, target_y } => {
                let _ = systems::weapons::fire_torpedo(
                    &mut self.world,
                    self.player,
                    target_x,
                    target_y,
                    self.viewport_width,
                    self.viewport_height,
                    &mut self.events,
                );
            }
            PlayerCommand::FireDeckGun => {
                let _ =
                    systems::weapons::fire_deck_gun(&mut self.world, self.player, &mut self.events);
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Helm intents (held keys)
        systems::helm::run(&mut self.world, self.helm);
        // 2. Submarine timers (air, gun cooldown; forced surfacing)
        systems::helm::tick_submarine(
            &mut self.world,
            &mut self.rng,
            self.player,
            &mut self.events,
        );
        // 3. Projectile advance + torpedo wakes
        systems::projectiles::run(&mut self.world);
        // 4. Pursuit movement + suicide contact
        systems::pursuit::run(&mut self.world, self.player, &mut self.events);
        // 5. Projectile-boat collision resolution
        systems::collision::run(&mut self.world, &mut self.score, &mut self.events);
        // 6. Effect aging
        systems::effects::run(&mut self.world);
        // 7. Cleanup (dead, expired, out-of-range)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 8. Wave-clear check (resupply + next wave)
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.score,
            self.player,
            self.viewport_width,
            self.viewport_height,
            &mut self.events,
        );
        // 9. Game-over check (terminal)
        self.check_game_over();
    }

    /// Transition to GameOver when the hull reaches zero. Terminal: no
    /// further ticks are processed afterwards.
    fn check_game_over(&mut self) {
        if let Ok(health) = self.world.get::<&Health>(self.player) {
            if health.current > 0 {
                return;
            }
        }
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver);
    }
}
