//! Enemy AI system — steering and the attack cycle for every enemy.
//!
//! Steering is delegated to the pure FSM in holdout-enemy-ai; this
//! system feeds it each enemy's situation, applies the resulting
//! state/velocity, and runs the timestamped wind-up/release attack
//! cycle (including boss bursts).

use hecs::World;

use holdout_core::components::{Enemy, Hero};
use holdout_core::constants::*;
use holdout_core::enums::{AttackPhase, Faction};
use holdout_core::stats::StatBlock;
use holdout_core::types::{Position, SimTime, Velocity};

use holdout_enemy_ai::fsm::{evaluate, SteerContext};
use holdout_enemy_ai::profiles::get_profile;

use crate::world_setup;

/// Run the enemy AI: steer every live enemy and advance attack cycles.
pub fn run(world: &mut World, time: &SimTime) {
    let hero_pos = match hero_position(world) {
        Some(p) => p,
        None => return,
    };
    let now_ms = time.elapsed_ms();

    // (origin, damage) of every projectile committed this tick.
    // Directions are resolved here, at commit time, toward the hero's
    // current position — moving during the wind-up dodges the shot.
    let mut releases: Vec<(Position, f64)> = Vec::new();

    for (_entity, (enemy, pos, vel, stats)) in
        world.query_mut::<(&mut Enemy, &Position, &mut Velocity, &StatBlock)>()
    {
        if !enemy.alive {
            *vel = Velocity::default();
            continue;
        }

        let profile = get_profile(enemy.kind);
        let ctx = SteerContext {
            profile: &profile,
            state: enemy.state,
            position: *pos,
            hero_position: hero_pos,
            offset_x: enemy.offset_x,
            offset_z: enemy.offset_z,
            distance_to_hero: pos.horizontal_range_to(&hero_pos),
        };
        let update = evaluate(&ctx);
        enemy.state = update.new_state;
        *vel = update.velocity;

        // Attack cycle: cooldown gate -> wind-up -> commit.
        match enemy.attack_phase {
            AttackPhase::Idle => {
                if enemy.state == holdout_core::enums::AiState::Attacking
                    && now_ms >= enemy.next_attack_ms
                {
                    enemy.attack_phase = AttackPhase::WindingUp;
                    enemy.phase_entered_ms = now_ms;
                }
            }
            AttackPhase::WindingUp => {
                // The release happens even if the hero stepped out of
                // range mid-wind-up; only the aim point is current.
                if now_ms - enemy.phase_entered_ms >= ATTACK_WINDUP_MS {
                    releases.push((*pos, stats.damage));
                    enemy.attack_phase = AttackPhase::Idle;
                    enemy.next_attack_ms = now_ms + stats.attack_cooldown_ms();

                    if profile.burst_attack && stats.health > stats.max_health / 2.0 {
                        enemy.pending_bursts = BOSS_BURST_OFFSETS_MS
                            .iter()
                            .map(|offset| now_ms + offset)
                            .collect();
                    }
                }
            }
        }

        // Scheduled boss bursts, each aimed at commit time.
        while let Some(&due) = enemy.pending_bursts.first() {
            if due > now_ms {
                break;
            }
            enemy.pending_bursts.remove(0);
            releases.push((*pos, stats.damage));
        }
    }

    for (origin, damage) in releases {
        let dir = Velocity::new(hero_pos.x - origin.x, 0.0, hero_pos.z - origin.z);
        world_setup::fire_projectile(
            world,
            origin,
            dir,
            Faction::Enemy,
            damage,
            ENEMY_PROJECTILE_SPEED,
            None,
        );
    }
}

fn hero_position(world: &World) -> Option<Position> {
    let mut q = world.query::<(&Hero, &Position)>();
    q.iter().map(|(_, (_, pos))| *pos).next()
}
