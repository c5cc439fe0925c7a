//! Kind-specific stat rows and behavior hooks.
//!
//! A single enemy representation parameterized by this table replaces
//! per-kind subclassing: every variant is the same entity shape with a
//! different row plus two small behavior flags.

use holdout_core::constants::*;
use holdout_core::enums::EnemyKind;

/// Spawn-time stats and behavior flags for an enemy kind.
///
/// Values are the final baseline for the kind (the Basic row is the
/// reference baseline); wave difficulty is stacked on top of these by
/// the wave director.
pub struct EnemyProfile {
    pub health: f64,
    /// Movement speed (units/s).
    pub speed: f64,
    /// Attacks per second.
    pub attack_speed: f64,
    pub damage: f64,
    /// Engagement distance (units).
    pub attack_range: f64,
    /// Collision radius (units).
    pub hitbox_size: f64,
    /// Hold position inside the ideal band instead of pressing in.
    pub holds_at_range: bool,
    /// Fires two extra bursts after the base attack while above half
    /// health (+300 ms / +600 ms).
    pub burst_attack: bool,
}

/// Get the profile row for a given enemy kind.
pub fn get_profile(kind: EnemyKind) -> EnemyProfile {
    match kind {
        EnemyKind::Basic => EnemyProfile {
            health: ENEMY_BASE_HEALTH,
            speed: ENEMY_BASE_SPEED,
            attack_speed: ENEMY_BASE_ATTACK_SPEED,
            damage: ENEMY_BASE_DAMAGE,
            attack_range: ENEMY_BASE_ATTACK_RANGE,
            hitbox_size: ENEMY_BASE_HITBOX,
            holds_at_range: false,
            burst_attack: false,
        },
        EnemyKind::Fast => EnemyProfile {
            health: 1.0,
            speed: 4.0,
            attack_speed: 1.5,
            damage: 1.0,
            attack_range: 1.5,
            hitbox_size: 2.0,
            holds_at_range: false,
            burst_attack: false,
        },
        EnemyKind::Tank => EnemyProfile {
            health: 5.0,
            speed: 1.0,
            attack_speed: 0.7,
            damage: 2.0,
            attack_range: 1.5,
            hitbox_size: 2.5,
            holds_at_range: false,
            burst_attack: false,
        },
        EnemyKind::Ranged => EnemyProfile {
            health: 2.0,
            speed: 1.5,
            attack_speed: 0.8,
            damage: 1.0,
            attack_range: 15.0,
            hitbox_size: 2.0,
            holds_at_range: true,
            burst_attack: false,
        },
        EnemyKind::Boss => EnemyProfile {
            health: 10.0,
            speed: 1.8,
            attack_speed: 1.2,
            damage: 3.0,
            attack_range: 10.0,
            hitbox_size: 3.0,
            holds_at_range: false,
            burst_attack: true,
        },
    }
}
