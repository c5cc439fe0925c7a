//! Failure indicators for player commands.
//!
//! No exceptions for control flow: invalid commands return a reason
//! and mutate nothing. The caller owns user-facing messaging.

use thiserror::Error;

use crate::enums::GamePhase;

/// Why a spend operation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpendError {
    #[error("insufficient gold: need {needed}, have {available}")]
    InsufficientGold { needed: u32, available: u32 },
}

/// Why a player command was refused.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CommandError {
    #[error(transparent)]
    Spend(#[from] SpendError),

    #[error("turret deploy on cooldown for {remaining_ms:.0} ms")]
    TurretCooldown { remaining_ms: f64 },

    #[error("too close to an existing structure (min spacing {min_spacing})")]
    TooCloseToStructure { min_spacing: f64 },

    #[error("position ({x:.1}, {z:.1}) is outside the arena")]
    OutOfArena { x: f64, z: f64 },

    #[error("no free tower slot")]
    NoTowerSlot,

    #[error("command not valid in phase {phase:?}")]
    WrongPhase { phase: GamePhase },
}
