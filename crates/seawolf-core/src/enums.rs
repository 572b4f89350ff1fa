//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
///
/// `GameOver` is terminal: the engine processes no further state changes
/// once the hull reaches zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    GameOver,
}

/// Projectile kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Click-aimed, fires submerged or surfaced.
    Torpedo,
    /// Fired along the heading, surfaced only, faster but worth less.
    DeckShell,
}

/// Transient visual effect kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Rising air bubble (dive, surface, torpedo wake).
    Bubble,
    /// Expanding blast (muzzle, kill, contact).
    Explosion,
}
