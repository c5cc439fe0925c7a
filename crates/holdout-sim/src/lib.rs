//! Simulation engine for HOLDOUT.
//!
//! Owns the hecs ECS world, runs systems in fixed order once per tick,
//! and produces GameStateSnapshots for the rendering layer. Completely
//! headless, enabling deterministic testing.

pub mod economy;
pub mod engine;
pub mod shop;
pub mod systems;
pub mod waves;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use holdout_core as core;

#[cfg(test)]
mod tests;
