//! Collision & damage resolver — the per-tick authority for matching
//! projectiles against combatants and applying damage formulas.
//!
//! Runs once per tick after movement and projectile advance.
//! Player-faction shots are tested against live enemies (first hit
//! wins — a projectile hits at most one target, unless it carries an
//! area effect). Enemy-faction shots are tested only against the hero,
//! where the evasion roll and armor mitigation apply.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use holdout_core::components::{Enemy, Hero, Projectile};
use holdout_core::constants::DEFAULT_HITBOX_SIZE;
use holdout_core::enums::{EnemyKind, Faction};
use holdout_core::events::UiEvent;
use holdout_core::stats::StatBlock;
use holdout_core::types::{Position, SimTime};

/// What the resolver produced this tick. Kills are consumed by the
/// economy for scoring and loot.
#[derive(Debug, Default)]
pub struct CollisionOutcome {
    pub kills: Vec<(EnemyKind, Position)>,
    pub hero_died: bool,
}

/// Run the resolver: match projectiles, apply damage, flag deaths.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    time: &SimTime,
    events: &mut Vec<UiEvent>,
    despawn_buffer: &mut Vec<Entity>,
) -> CollisionOutcome {
    let mut outcome = CollisionOutcome::default();
    despawn_buffer.clear();

    // Gather projectiles by faction. Structure shots fly under the
    // player faction and resolve identically.
    let mut player_shots: Vec<(Entity, Position, f64, Option<f64>)> = Vec::new();
    let mut enemy_shots: Vec<(Entity, Position, f64)> = Vec::new();
    {
        let mut q = world.query::<(&Projectile, &Position)>();
        for (entity, (proj, pos)) in q.iter() {
            match proj.faction {
                Faction::Enemy => enemy_shots.push((entity, *pos, proj.damage)),
                _ => player_shots.push((entity, *pos, proj.damage, proj.area_radius)),
            }
        }
    }

    // Gather live enemies with remaining health so multiple shots in
    // one tick cannot double-kill a target.
    let mut targets: Vec<(Entity, Position, f64, f64)> = {
        let mut q = world.query::<(&Enemy, &Position, &StatBlock)>();
        q.iter()
            .filter(|(_, (enemy, _, _))| enemy.alive)
            .map(|(entity, (_, pos, stats))| {
                let hitbox = if stats.hitbox_size > 0.0 {
                    stats.hitbox_size
                } else {
                    DEFAULT_HITBOX_SIZE
                };
                (entity, *pos, hitbox, stats.health)
            })
            .collect()
    };

    // Damage to apply after matching: (enemy, amount).
    let mut hits: Vec<(Entity, f64)> = Vec::new();

    for (shot_entity, shot_pos, damage, area_radius) in player_shots {
        let hit_idx = targets
            .iter()
            .position(|(_, pos, hitbox, health)| {
                *health > 0.0 && shot_pos.horizontal_range_to(pos) < *hitbox
            });
        let Some(idx) = hit_idx else { continue };

        if let Some(radius) = area_radius {
            // Area effect: everyone within the blast radius of the
            // impact point takes the damage.
            let impact = shot_pos;
            for (entity, pos, _, health) in targets.iter_mut() {
                if *health > 0.0 && impact.horizontal_range_to(pos) <= radius {
                    *health -= damage;
                    hits.push((*entity, damage));
                }
            }
        } else {
            let (entity, _, _, health) = &mut targets[idx];
            *health -= damage;
            hits.push((*entity, damage));
        }

        despawn_buffer.push(shot_entity);
    }

    // Apply enemy damage and flag deaths (despawn is deferred for the
    // cosmetic corpse interval; a dead enemy is out of play now).
    for (entity, damage) in hits {
        let depleted = match world.get::<&mut StatBlock>(entity) {
            Ok(mut stats) => {
                stats.apply_damage(damage);
                stats.is_depleted()
            }
            Err(_) => continue,
        };
        if !depleted {
            continue;
        }
        let position = world.get::<&Position>(entity).map(|p| *p).unwrap_or_default();
        if let Ok(mut enemy) = world.get::<&mut Enemy>(entity) {
            if enemy.alive {
                enemy.alive = false;
                enemy.died_at_secs = time.elapsed_secs;
                enemy.pending_bursts.clear();
                outcome.kills.push((enemy.kind, position));
            }
        }
    }

    // Enemy shots test only against the hero.
    let hero = {
        let mut q = world.query::<(&Hero, &Position, &StatBlock)>();
        q.iter()
            .map(|(entity, (_, pos, stats))| (entity, *pos, stats.hitbox_size, stats.evasion))
            .next()
    };

    if let Some((hero_entity, hero_pos, hero_hitbox, evasion)) = hero {
        let hitbox = if hero_hitbox > 0.0 {
            hero_hitbox
        } else {
            DEFAULT_HITBOX_SIZE
        };

        for (shot_entity, shot_pos, damage) in enemy_shots {
            if shot_pos.horizontal_range_to(&hero_pos) >= hitbox {
                continue;
            }
            despawn_buffer.push(shot_entity);

            // Evasion first: a draw in [0,100) below the stat negates
            // the hit entirely.
            let draw: f64 = rng.gen_range(0.0..100.0);
            if draw < evasion {
                events.push(UiEvent::Dodged { position: hero_pos });
                continue;
            }

            if let Ok(mut stats) = world.get::<&mut StatBlock>(hero_entity) {
                let final_damage = stats.mitigated(damage);
                stats.apply_damage(final_damage);
                events.push(UiEvent::HealthChanged {
                    current: stats.health,
                    max: stats.max_health,
                });
                if stats.is_depleted() {
                    outcome.hero_died = true;
                }
            }
        }
    }

    // Destroyed projectiles are removed this same tick.
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    outcome
}
