//! Player commands sent from the frontend to the simulation.
//!
//! Commands are validated and queued for processing at the next tick
//! boundary. Invalid actions (firing with empty tubes, diving while
//! already submerged, ...) decline silently and leave state unchanged.

use serde::{Deserialize, Serialize};

/// Held-key movement state, applied every tick until replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelmInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Replace the held-key movement state.
    SetHelm { helm: HelmInput },
    /// Submerge (no-op while submerged; the air timer is not reset).
    Dive,
    /// Surface (no-op while surfaced).
    Surface,
    /// Fire a torpedo at a point in viewport space. The aim direction is
    /// taken from the viewport center (where the player is drawn).
    FireTorpedo { target_x: f64, target_y: f64 },
    /// Fire the deck gun along the current heading.
    FireDeckGun,
    /// Report a viewport resize (affects aim mapping and spawn placement).
    SetViewport { width: f64, height: f64 },
}
