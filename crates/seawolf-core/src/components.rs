//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::{EffectKind, ProjectileKind};

/// The player's submersible. Exactly one entity carries this component.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Submarine {
    /// Heading in radians (0 = +x, counter-clockwise positive).
    pub heading: f64,
    /// Base displacement per movement tick.
    pub speed: f64,
    /// Whether the boat is currently submerged.
    pub underwater: bool,
    /// Seconds of air remaining while submerged.
    pub dive_timer_secs: f64,
    /// Deck gun reload remaining (seconds, 0 = ready).
    pub gun_cooldown_secs: f64,
}

/// Hull points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

/// Torpedo magazine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TorpedoTubes {
    pub loaded: u32,
    pub capacity: u32,
}

/// A torpedo or deck shell in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub kind: ProjectileKind,
    /// Unit direction of travel.
    pub dir_x: f64,
    pub dir_y: f64,
    /// Displacement per tick.
    pub speed: f64,
    /// Set by the collision resolver; pruned at end of tick.
    pub dead: bool,
}

/// An enemy boat closing on the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PursuitBoat {
    /// Displacement per tick (scales with wave number).
    pub speed: f64,
    /// Set on projectile hit or suicide contact; pruned at end of tick.
    pub dead: bool,
}

/// A short-lived visual effect (bubble or explosion).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Effect {
    pub kind: EffectKind,
    /// Remaining lifetime in seconds; pruned at <= 0.
    pub life_secs: f64,
    /// Initial lifetime, for fade-out rendering.
    pub max_life_secs: f64,
}
