//! Hero system — movement intent integration, regeneration, firing.

use hecs::World;

use holdout_core::components::Hero;
use holdout_core::constants::*;
use holdout_core::enums::Faction;
use holdout_core::events::UiEvent;
use holdout_core::stats::StatBlock;
use holdout_core::types::{Position, SimTime, Velocity};

use crate::economy::EconomyLedger;
use crate::world_setup;

/// Run the hero update. `fire_requested` is the edge-triggered fire
/// intent for this tick; returns true if a shot was produced.
pub fn run(
    world: &mut World,
    time: &SimTime,
    dt: f64,
    fire_requested: bool,
    ledger: &mut EconomyLedger,
    events: &mut Vec<UiEvent>,
) -> bool {
    let now_ms = time.elapsed_ms();
    let mut shot: Option<(Position, Velocity, f64)> = None;

    for (_entity, (hero, pos, stats)) in world.query_mut::<(&mut Hero, &mut Position, &mut StatBlock)>() {
        // 1. Movement: intent is already normalized; integrate and
        //    clamp to the arena.
        pos.x = (pos.x + hero.move_x * stats.speed * dt)
            .clamp(-ARENA_HALF_EXTENT, ARENA_HALF_EXTENT);
        pos.z = (pos.z + hero.move_z * stats.speed * dt)
            .clamp(-ARENA_HALF_EXTENT, ARENA_HALF_EXTENT);

        // 2. Regeneration, clamped to max. Regen that actually moved a
        //    gauge is surfaced; a gauge pinned at max stays silent.
        let health_before = stats.health;
        let mana_before = hero.mana;
        stats.heal(hero.health_regen * dt);
        hero.mana = (hero.mana + hero.mana_regen * dt).min(hero.max_mana);
        if stats.health != health_before {
            events.push(UiEvent::HealthChanged {
                current: stats.health,
                max: stats.max_health,
            });
        }
        if hero.mana != mana_before {
            events.push(UiEvent::ManaChanged {
                current: hero.mana,
                max: hero.max_mana,
            });
        }

        // 3. Firing: fixed-rate cooldown of 1000/attack_speed ms.
        //    Ammo is bookkeeping only and never blocks the shot.
        if fire_requested && now_ms - hero.last_shot_ms >= stats.attack_cooldown_ms() {
            hero.last_shot_ms = now_ms;
            let dir = Velocity::new(hero.facing_x, 0.0, hero.facing_z);
            shot = Some((*pos, dir, stats.damage));
        }
    }

    if let Some((origin, dir, damage)) = shot {
        world_setup::fire_projectile(
            world,
            origin,
            dir,
            Faction::Player,
            damage,
            HERO_PROJECTILE_SPEED,
            None,
        );
        ledger.consume_ammo();
        return true;
    }
    false
}
