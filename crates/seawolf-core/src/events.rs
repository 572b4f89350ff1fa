//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::ProjectileKind;

/// Per-tick event stream included in the snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A torpedo left the tubes.
    TorpedoAway { remaining: u32 },
    /// The deck gun fired.
    ShellAway,
    /// The boat submerged.
    Submerged,
    /// The boat surfaced. `forced` is true when the air timer elapsed.
    Surfaced { forced: bool },
    /// A pursuit boat was destroyed by a projectile.
    BoatDestroyed { x: f64, y: f64, kind: ProjectileKind },
    /// A boat rammed the surfaced player.
    HullHit { damage: u32 },
    /// The previous wave was cleared; `wave` is the newly spawned one.
    WaveCleared { wave: u32 },
    /// Hull reached zero. Terminal.
    GameOver,
}
