//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in world space (abstract units).
/// The world is unbounded; the camera stays centered on the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared range to another position. Preferred for threshold
    /// comparisons (compare against squared radii).
    pub fn range_sq_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Range to another position in world units.
    pub fn range_to(&self, other: &Position) -> f64 {
        self.range_sq_to(other).sqrt()
    }

    /// Unit vector from this position toward another.
    /// `None` when the positions coincide (zero-length direction).
    pub fn direction_to(&self, other: &Position) -> Option<DVec2> {
        DVec2::new(other.x - self.x, other.y - self.y).try_normalize()
    }

    /// Displace by `dir * distance`.
    pub fn advance(&mut self, dir: DVec2, distance: f64) {
        self.x += dir.x * distance;
        self.y += dir.y * distance;
    }
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
