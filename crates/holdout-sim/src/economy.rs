//! Economy ledger — score, gold, and ammo counters.
//!
//! Stored on the engine, NOT as an ECS entity. All mutation goes
//! through named operations so the invariants (never negative after a
//! spend, spend checks sufficiency first) live in one place.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use holdout_core::constants::*;
use holdout_core::enums::EnemyKind;
use holdout_core::errors::SpendError;

/// Resource counters mutated by combat outcomes and purchases.
#[derive(Debug, Clone, Default)]
pub struct EconomyLedger {
    pub score: u32,
    pub gold: u32,
    /// Unbounded counter. Decremented per shot and incremented by loot
    /// for UI/reward purposes, but firing is never blocked by it.
    pub ammo: u32,
}

/// What a single kill paid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KillReward {
    pub score: u32,
    pub gold: u32,
    pub ammo: u32,
}

impl EconomyLedger {
    pub fn new_run() -> Self {
        Self {
            score: 0,
            gold: STARTING_GOLD,
            ammo: STARTING_AMMO,
        }
    }

    /// Award score, gold, and a probabilistic ammo bonus for a kill.
    ///
    /// Gold is `base * (1 ± GOLD_JITTER) * max(1, wave * 0.2)`, floored.
    /// Ammo: 15% chance of +3, except boss kills which always pay +15.
    pub fn award_kill(&mut self, kind: EnemyKind, wave: u32, rng: &mut ChaCha8Rng) -> KillReward {
        let score = score_value(kind);

        let jitter = rng.gen_range(1.0 - GOLD_JITTER..1.0 + GOLD_JITTER);
        let wave_scale = (wave as f64 * 0.2).max(1.0);
        let gold = (gold_base(kind) as f64 * jitter * wave_scale).floor() as u32;

        let ammo = if kind == EnemyKind::Boss {
            BOSS_AMMO_BONUS
        } else if rng.gen_range(0.0..1.0) < AMMO_BONUS_CHANCE {
            AMMO_BONUS_AMOUNT
        } else {
            0
        };

        self.score += score;
        self.gold += gold;
        self.ammo += ammo;

        KillReward { score, gold, ammo }
    }

    /// Spend gold. Verifies sufficiency first; on shortfall nothing is
    /// deducted and the caller gets the amounts for messaging.
    pub fn spend(&mut self, cost: u32) -> Result<(), SpendError> {
        if self.gold < cost {
            return Err(SpendError::InsufficientGold {
                needed: cost,
                available: self.gold,
            });
        }
        self.gold -= cost;
        Ok(())
    }

    pub fn add_ammo(&mut self, amount: u32) {
        self.ammo += amount;
    }

    /// Spend one round of ammo for bookkeeping. Never blocks firing;
    /// the counter just floors at zero.
    pub fn consume_ammo(&mut self) {
        self.ammo = self.ammo.saturating_sub(1);
    }
}

/// Score awarded per kill by enemy kind.
pub fn score_value(kind: EnemyKind) -> u32 {
    match kind {
        EnemyKind::Basic => 10,
        EnemyKind::Fast => 15,
        EnemyKind::Ranged => 20,
        EnemyKind::Tank => 25,
        EnemyKind::Boss => 100,
    }
}

/// Base gold per kill by enemy kind, before jitter and wave scaling.
pub fn gold_base(kind: EnemyKind) -> u32 {
    match kind {
        EnemyKind::Basic => 5,
        EnemyKind::Fast => 8,
        EnemyKind::Ranged => 10,
        EnemyKind::Tank => 12,
        EnemyKind::Boss => 50,
    }
}
