//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Which side a combatant or projectile belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    #[default]
    Player,
    Enemy,
    /// Neutral defensive structures (turrets, towers).
    Structure,
}

/// Enemy variant tag. Each kind maps to a fixed multiplier row in the
/// behavior profile table; there is no per-kind subclassing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    #[default]
    Basic,
    Fast,
    Tank,
    Ranged,
    Boss,
}

/// Enemy steering state, recomputed from distance every tick.
/// There is deliberately no hysteresis band: an enemy sitting exactly
/// at attack range may flicker between states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiState {
    /// Closing on the hero (distance > attack_range).
    #[default]
    Seeking,
    /// In range; running the attack cooldown/wind-up cycle.
    Attacking,
}

/// Timestamped attack sub-state. Wind-up replaces timer-callback
/// chains: the release is evaluated during the normal tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackPhase {
    #[default]
    Idle,
    /// Committed to an attack; projectile direction is resolved when
    /// the wind-up delay elapses, not when it began.
    WindingUp,
}

/// Defensive structure variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureKind {
    /// Player-deployed, finite ammo, despawns when ammo runs out.
    Turret,
    /// Shop-built emplacement with no ammo limit.
    Tower,
}

/// Game phase (top-level state machine).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    /// Combat ticks running.
    Active,
    /// Transient freeze; fully reversible.
    Paused,
    /// Between waves; purchases allowed, combat frozen.
    Shop,
    /// Terminal. No further combat ticks.
    GameOver,
}

/// Purchasable shop items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShopItem {
    DamageUp,
    AttackSpeedUp,
    MaxHealthUp,
    ArmorUp,
    RegenUp,
    AmmoPack,
    Tower,
}
