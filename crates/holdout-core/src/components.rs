//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::{AiState, AttackPhase, EnemyKind, Faction, StructureKind};

/// The player-controlled combatant. Singleton, owned by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    /// Current movement intent on the x/z plane (normalized or zero).
    pub move_x: f64,
    pub move_z: f64,
    /// Facing direction used for shots (unit vector on x/z).
    pub facing_x: f64,
    pub facing_z: f64,
    pub mana: f64,
    pub max_mana: f64,
    /// Mana regenerated per second.
    pub mana_regen: f64,
    /// Health regenerated per second.
    pub health_regen: f64,
    /// Timestamp (ms) of the last shot, for the fire cooldown.
    pub last_shot_ms: f64,
}

/// An enemy combatant. Owned by the wave director's live set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub state: AiState,
    /// Per-instance random approach offset, fixed at spawn, used to
    /// avoid spawn clustering.
    pub offset_x: f64,
    pub offset_z: f64,
    /// Timestamped attack sub-state (wind-up handled in the tick, not
    /// via timer callbacks).
    pub attack_phase: AttackPhase,
    /// Timestamp (ms) the current attack phase was entered.
    pub phase_entered_ms: f64,
    /// Timestamp (ms) before which the next attack may not begin.
    pub next_attack_ms: f64,
    /// Scheduled extra burst releases (ms timestamps; boss only).
    pub pending_bursts: Vec<f64>,
    /// Flagged false immediately on death; the corpse lingers briefly
    /// but a dead enemy is never targeted, never attacks, and is not
    /// counted toward wave completion.
    pub alive: bool,
    /// Sim time (seconds) of death, for the corpse linger interval.
    pub died_at_secs: f64,
}

/// An in-flight projectile. Owned by the projectile subsystem from
/// creation to destruction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    /// Owning side; decides what the resolver tests it against.
    pub faction: Faction,
    pub damage: f64,
    /// Seconds since launch; expired past the lifetime limit.
    pub lifetime_secs: f64,
    /// Blast radius for area-effect shots.
    pub area_radius: Option<f64>,
}

/// A deployed defensive structure (turret or tower).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Structure {
    pub kind: StructureKind,
    /// Timestamp (ms) before which the structure may not fire again.
    pub next_shot_ms: f64,
}
