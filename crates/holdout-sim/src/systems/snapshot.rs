//! Snapshot builder — serializes the visible world state each tick.

use hecs::World;

use holdout_core::components::{Enemy, Hero, Projectile, Structure};
use holdout_core::enums::{GamePhase, StructureKind};
use holdout_core::events::UiEvent;
use holdout_core::state::*;
use holdout_core::stats::StatBlock;
use holdout_core::types::{Position, SimTime};

use crate::economy::EconomyLedger;
use crate::waves::WaveDirector;

/// Build the complete snapshot for the rendering layer.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    wave: &WaveDirector,
    ledger: &EconomyLedger,
    events: Vec<UiEvent>,
) -> GameStateSnapshot {
    let hero = {
        let mut q = world.query::<(&Hero, &Position, &StatBlock)>();
        q.iter()
            .map(|(_, (hero, pos, stats))| HeroView {
                position: *pos,
                facing_x: hero.facing_x,
                facing_z: hero.facing_z,
                health: stats.health,
                max_health: stats.max_health,
                mana: hero.mana,
                max_mana: hero.max_mana,
                damage: stats.damage,
                attack_speed: stats.attack_speed,
                armor: stats.armor,
                evasion: stats.evasion,
            })
            .next()
            .unwrap_or_default()
    };

    let enemies = {
        let mut q = world.query::<(&Enemy, &Position, &StatBlock)>();
        q.iter()
            .map(|(_, (enemy, pos, stats))| EnemyView {
                kind: enemy.kind,
                position: *pos,
                health: stats.health,
                max_health: stats.max_health,
                state: enemy.state,
                alive: enemy.alive,
            })
            .collect()
    };

    let projectiles = {
        let mut q = world.query::<(&Projectile, &Position)>();
        q.iter()
            .map(|(_, (proj, pos))| ProjectileView {
                position: *pos,
                faction: proj.faction,
                area_radius: proj.area_radius,
            })
            .collect()
    };

    let structures = {
        let mut q = world.query::<(&Structure, &Position, &StatBlock)>();
        q.iter()
            .map(|(_, (structure, pos, stats))| StructureView {
                kind: structure.kind,
                position: *pos,
                health: stats.health,
                ammo: match structure.kind {
                    StructureKind::Turret => Some(stats.ammo.max(0.0) as u32),
                    StructureKind::Tower => None,
                },
            })
            .collect()
    };

    GameStateSnapshot {
        time: *time,
        phase,
        hero,
        enemies,
        projectiles,
        structures,
        wave: WaveView {
            number: wave.number,
            difficulty: wave.difficulty,
            enemies_remaining: WaveDirector::live_enemies(world),
        },
        economy: EconomyView {
            score: ledger.score,
            gold: ledger.gold,
            ammo: ledger.ammo,
        },
        events,
    }
}
