//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for
//! read-only). They do not own state — all state lives in components or
//! in the engine's scalar fields passed in by reference.

pub mod cleanup;
pub mod collision;
pub mod effects;
pub mod helm;
pub mod projectiles;
pub mod pursuit;
pub mod snapshot;
pub mod wave_spawner;
pub mod weapons;
