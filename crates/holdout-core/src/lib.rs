//! Core types and definitions for the HOLDOUT combat simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! stat blocks, enums, commands, UI events, snapshots, and constants.
//! It has no dependency on the ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod events;
pub mod state;
pub mod stats;
pub mod types;
