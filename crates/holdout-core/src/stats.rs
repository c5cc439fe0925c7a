//! Stat model — the numeric attribute bag attached to every combatant.
//!
//! Pure data plus derived-value helpers. Behavior lives in systems.

use serde::{Deserialize, Serialize};

use crate::constants::ARMOR_MITIGATION_CAP;

/// Named numeric attributes shared by every combat-capable entity.
///
/// Negative values are not clamped except where stated; the armor
/// mitigation effect is capped at 75% regardless of the stat value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatBlock {
    pub health: f64,
    pub max_health: f64,
    pub damage: f64,
    /// Movement speed (units/s).
    pub speed: f64,
    /// Attack reach / engagement distance (units).
    pub attack_range: f64,
    /// Attacks per second; cooldown is 1000/attack_speed ms.
    pub attack_speed: f64,
    /// Percentage damage reduction, 0-100 (effect capped at 75%).
    pub armor: f64,
    /// Percentage chance to fully negate incoming damage, 0-100.
    pub evasion: f64,
    /// Collision radius for projectile hits (units).
    pub hitbox_size: f64,
    /// Range at which this entity notices targets (units).
    pub detection_range: f64,
    /// Projectile emissions per second (structures).
    pub fire_rate: f64,
    /// Ammunition counter. Unbounded; see the ledger for semantics.
    pub ammo: f64,
}

impl Default for StatBlock {
    fn default() -> Self {
        Self {
            health: 100.0,
            max_health: 100.0,
            damage: 1.0,
            speed: 2.0,
            attack_range: 1.5,
            attack_speed: 1.0,
            armor: 0.0,
            evasion: 0.0,
            hitbox_size: 1.2,
            detection_range: 20.0,
            fire_rate: 1.0,
            ammo: 0.0,
        }
    }
}

impl StatBlock {
    /// Damage remaining after armor mitigation.
    /// `final = amount * (1 - min(armor/100, 0.75))`.
    pub fn mitigated(&self, amount: f64) -> f64 {
        let reduction = (self.armor / 100.0).min(ARMOR_MITIGATION_CAP);
        amount * (1.0 - reduction)
    }

    /// Milliseconds between attacks at the current attack speed.
    pub fn attack_cooldown_ms(&self) -> f64 {
        1000.0 / self.attack_speed
    }

    /// Heal by `amount`, clamped so health never exceeds max_health.
    pub fn heal(&mut self, amount: f64) {
        self.health = (self.health + amount).min(self.max_health);
    }

    /// Subtract already-mitigated damage from health.
    pub fn apply_damage(&mut self, amount: f64) {
        self.health -= amount;
    }

    /// Whether health has been driven to zero or below.
    pub fn is_depleted(&self) -> bool {
        self.health <= 0.0
    }
}
