//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for
//! read-only). They do not own state — all state lives in components
//! or on the engine. Update order within a tick is significant and is
//! fixed by the engine.

pub mod cleanup;
pub mod collision;
pub mod enemy_ai;
pub mod hero;
pub mod movement;
pub mod projectile;
pub mod snapshot;
pub mod structures;
