//! Events emitted by the simulation for UI feedback.
//!
//! Fire-and-forget: consumers render them, nothing flows back.

use serde::{Deserialize, Serialize};

use crate::enums::EnemyKind;
use crate::types::Position;

/// UI events drained into each snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiEvent {
    /// Hero health changed (damage, regen, or max-health upgrade).
    HealthChanged { current: f64, max: f64 },
    /// Hero mana changed.
    ManaChanged { current: f64, max: f64 },
    /// Score counter changed.
    ScoreChanged { value: u32 },
    /// Gold counter changed.
    GoldChanged { value: u32 },
    /// Ammo counter changed.
    AmmoChanged { value: u32 },
    /// A new wave started.
    WaveChanged { number: u32 },
    /// The current wave's last enemy died.
    WaveComplete { number: u32 },
    /// An enemy died; position is for loot-drop visuals.
    EnemyKilled { kind: EnemyKind, position: Position },
    /// An incoming attack was fully negated by evasion.
    Dodged { position: Position },
    /// Hero died; the run is over.
    GameOver,
    /// Transient banner text.
    Notification { text: String, duration_ms: u32 },
}
