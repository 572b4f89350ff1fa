//! Game state snapshot — the complete visible state sent to the frontend
//! each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{EffectKind, GamePhase, ProjectileKind};
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub submarine: SubmarineView,
    pub torpedoes: Vec<ProjectileView>,
    pub shells: Vec<ProjectileView>,
    pub boats: Vec<BoatView>,
    pub effects: Vec<EffectView>,
    pub hud: HudView,
    pub events: Vec<GameEvent>,
}

/// Player boat state for rendering (camera centers on `position`).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SubmarineView {
    pub position: Position,
    /// Heading in radians.
    pub heading: f64,
    pub underwater: bool,
    /// Air remaining while submerged (seconds).
    pub dive_timer_secs: f64,
    /// Deck gun reload remaining (seconds).
    pub gun_cooldown_secs: f64,
}

/// A projectile in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    /// Travel direction in radians, for sprite rotation.
    pub heading: f64,
    pub kind: ProjectileKind,
}

/// An enemy boat.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoatView {
    pub position: Position,
    pub speed: f64,
}

/// A transient effect.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EffectView {
    pub position: Position,
    pub kind: EffectKind,
    /// Remaining life as a fraction of the initial lifetime (for alpha).
    pub life_frac: f64,
}

/// HUD values.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HudView {
    pub health: u32,
    pub max_health: u32,
    pub torpedoes: u32,
    pub max_torpedoes: u32,
    pub scrap: u32,
    pub wave: u32,
    pub score: u32,
}
