//! Structure system — turret/tower targeting and firing.
//!
//! Structures resolve their cadence by stored timestamps gated on
//! attack_speed rather than projectile collision: each one fires at
//! the nearest live enemy in range whenever its cooldown has elapsed.
//! Their projectiles fly under the player faction and flow through the
//! same resolver as hero shots.

use hecs::{Entity, World};

use holdout_core::components::{Enemy, Structure};
use holdout_core::constants::*;
use holdout_core::enums::{Faction, StructureKind};
use holdout_core::stats::StatBlock;
use holdout_core::types::{Position, SimTime, Velocity};

use crate::world_setup;

/// Run structure targeting/firing. Turrets that exhaust their ammo are
/// despawned (the externally-despawned lifecycle path).
pub fn run(world: &mut World, time: &SimTime, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    let now_ms = time.elapsed_ms();

    // Live enemy positions, gathered once.
    let enemies: Vec<Position> = {
        let mut q = world.query::<(&Enemy, &Position)>();
        q.iter()
            .filter(|(_, (enemy, _))| enemy.alive)
            .map(|(_, (_, pos))| *pos)
            .collect()
    };

    let mut shots: Vec<(Position, Position, f64)> = Vec::new();

    for (entity, (structure, pos, stats)) in
        world.query_mut::<(&mut Structure, &Position, &mut StatBlock)>()
    {
        if now_ms < structure.next_shot_ms {
            continue;
        }

        let target = enemies
            .iter()
            .map(|e| (e, pos.horizontal_range_to(e)))
            .filter(|(_, dist)| *dist <= stats.attack_range)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(e, _)| *e);

        let Some(target) = target else { continue };

        structure.next_shot_ms = now_ms + stats.attack_cooldown_ms();
        shots.push((*pos, target, stats.damage));

        if structure.kind == StructureKind::Turret {
            stats.ammo -= 1.0;
            if stats.ammo <= 0.0 {
                despawn_buffer.push(entity);
            }
        }
    }

    for (origin, target, damage) in shots {
        let dir = Velocity::new(target.x - origin.x, 0.0, target.z - origin.z);
        world_setup::fire_projectile(
            world,
            origin,
            dir,
            Faction::Player,
            damage,
            TURRET_PROJECTILE_SPEED,
            None,
        );
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
