//! Tests for the simulation engine: lifecycle, waves, combat
//! resolution, economy flow, and determinism.

use holdout_core::commands::PlayerCommand;
use holdout_core::components::{Enemy, Hero, Projectile, Structure};
use holdout_core::constants::*;
use holdout_core::enums::*;
use holdout_core::events::UiEvent;
use holdout_core::stats::StatBlock;
use holdout_core::types::{Position, SimTime, Velocity};

use crate::engine::{SimConfig, SimulationEngine};
use crate::systems;
use crate::world_setup;

fn started_engine(base_per_wave: u32, seed: u64) -> SimulationEngine {
    let mut engine = SimulationEngine::new(SimConfig { seed, base_per_wave });
    engine.queue_command(PlayerCommand::StartGame);
    engine.tick(DT);
    engine
}

/// Force-kill every live enemy (bypasses combat for wave progression).
fn kill_all_enemies(engine: &mut SimulationEngine) {
    let now = engine.time().elapsed_secs;
    for (_entity, (enemy, stats)) in engine.world_mut().query_mut::<(&mut Enemy, &mut StatBlock)>()
    {
        if enemy.alive {
            enemy.alive = false;
            enemy.died_at_secs = now;
            stats.health = 0.0;
        }
    }
}

fn live_enemy_kinds(engine: &SimulationEngine) -> Vec<EnemyKind> {
    let mut q = engine.world().query::<&Enemy>();
    q.iter()
        .filter(|(_, e)| e.alive)
        .map(|(_, e)| e.kind)
        .collect()
}

fn hero_stats(engine: &SimulationEngine) -> StatBlock {
    let mut q = engine.world().query::<(&Hero, &StatBlock)>();
    q.iter().map(|(_, (_, s))| s.clone()).next().unwrap()
}

fn hero_position(engine: &SimulationEngine) -> Position {
    let mut q = engine.world().query::<(&Hero, &Position)>();
    q.iter().map(|(_, (_, p))| *p).next().unwrap()
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = started_engine(BASE_ENEMIES_PER_WAVE, 12345);
    let mut engine_b = started_engine(BASE_ENEMIES_PER_WAVE, 12345);

    engine_a.queue_command(PlayerCommand::Fire);
    engine_b.queue_command(PlayerCommand::Fire);

    for _ in 0..300 {
        let snap_a = engine_a.tick(DT);
        let snap_b = engine_b.tick(DT);

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = started_engine(BASE_ENEMIES_PER_WAVE, 111);
    let mut engine_b = started_engine(BASE_ENEMIES_PER_WAVE, 222);

    // Spawn placement is seeded, so the very first snapshots differ.
    let snap_a = engine_a.tick(DT);
    let snap_b = engine_b.tick(DT);
    let json_a = serde_json::to_string(&snap_a).unwrap();
    let json_b = serde_json::to_string(&snap_b).unwrap();
    assert_ne!(json_a, json_b, "different seeds should diverge");
}

// ---- Session lifecycle ----

#[test]
fn test_start_game_spawns_wave_one() {
    let engine = started_engine(BASE_ENEMIES_PER_WAVE, 42);
    assert_eq!(engine.phase(), GamePhase::Active);
    assert_eq!(engine.wave().number, 1);
    assert_eq!(engine.wave().difficulty, 1.0);
    assert_eq!(
        live_enemy_kinds(&engine).len(),
        BASE_ENEMIES_PER_WAVE as usize
    );
}

#[test]
fn test_pause_freezes_simulation() {
    let mut engine = started_engine(1, 42);
    engine.queue_command(PlayerCommand::Pause);
    let snap = engine.tick(DT);
    assert_eq!(snap.phase, GamePhase::Paused);
    let tick_before = engine.time().tick;
    engine.tick(DT);
    engine.tick(DT);
    assert_eq!(engine.time().tick, tick_before, "paused time must not advance");

    engine.queue_command(PlayerCommand::Resume);
    engine.tick(DT);
    assert!(engine.time().tick > tick_before);
}

#[test]
fn test_wave_completion_transitions_to_shop() {
    let mut engine = started_engine(2, 42);
    assert!(!engine.wave().is_wave_complete(engine.world()));

    kill_all_enemies(&mut engine);
    let snap = engine.tick(DT);
    assert_eq!(snap.phase, GamePhase::Shop);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, UiEvent::WaveComplete { number: 1 })));
}

#[test]
fn test_start_next_wave_applies_count_and_difficulty() {
    let mut engine = started_engine(5, 42);
    kill_all_enemies(&mut engine);
    engine.tick(DT);

    engine.queue_command(PlayerCommand::StartNextWave);
    let snap = engine.tick(DT);
    assert_eq!(snap.phase, GamePhase::Active);
    assert_eq!(engine.wave().number, 2);
    assert!((engine.wave().difficulty - 1.2).abs() < 1e-9);
    assert_eq!(live_enemy_kinds(&engine).len(), 7); // 5 + (2-1)*2
}

#[test]
fn test_wave_five_is_a_boss_wave() {
    let mut engine = started_engine(5, 42);
    for _ in 0..4 {
        kill_all_enemies(&mut engine);
        engine.tick(DT);
        engine.queue_command(PlayerCommand::StartNextWave);
        engine.tick(DT);
    }
    assert_eq!(engine.wave().number, 5);

    let kinds = live_enemy_kinds(&engine);
    assert_eq!(kinds.len(), 13); // 5 + (5-1)*2
    let bosses = kinds.iter().filter(|k| **k == EnemyKind::Boss).count();
    assert_eq!(bosses, 1, "wave 5 carries exactly one boss");
    assert!(
        kinds
            .iter()
            .all(|k| matches!(k, EnemyKind::Boss | EnemyKind::Fast | EnemyKind::Basic)),
        "boss-wave minions are fast/basic only"
    );
}

// ---- Hero ----

#[test]
fn test_move_intent_integrates_position() {
    let mut engine = started_engine(1, 42);
    engine.queue_command(PlayerCommand::SetMoveIntent { x: 1.0, z: 0.0 });
    for _ in 0..60 {
        engine.tick(DT);
    }
    let pos = hero_position(&engine);
    assert!(
        (pos.x - HERO_SPEED).abs() < 0.01,
        "one second of movement should cover speed units, got {}",
        pos.x
    );
}

#[test]
fn test_hero_stays_inside_arena() {
    let mut engine = started_engine(1, 42);
    engine.queue_command(PlayerCommand::SetMoveIntent { x: 1.0, z: 0.0 });
    for _ in 0..(20 * 60) {
        engine.tick(DT);
        if engine.phase() != GamePhase::Active {
            break;
        }
    }
    assert!(hero_position(&engine).x <= ARENA_HALF_EXTENT);
}

#[test]
fn test_fire_produces_projectile_and_spends_ammo() {
    let mut engine = started_engine(1, 42);
    engine.queue_command(PlayerCommand::Fire);
    let snap = engine.tick(DT);

    let player_shots = snap
        .projectiles
        .iter()
        .filter(|p| p.faction == Faction::Player)
        .count();
    assert_eq!(player_shots, 1);
    assert_eq!(snap.economy.ammo, STARTING_AMMO - 1);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, UiEvent::AmmoChanged { .. })));
}

#[test]
fn test_fire_cooldown_limits_rate() {
    let mut engine = started_engine(1, 42);
    // Hold the trigger for one second at 2 attacks/sec.
    let mut shots = 0;
    for _ in 0..60 {
        engine.queue_command(PlayerCommand::Fire);
        let before = engine.ledger().ammo;
        engine.tick(DT);
        if engine.ledger().ammo < before {
            shots += 1;
        }
    }
    assert_eq!(shots, 2, "2.0 attack speed fires twice per second");
}

#[test]
fn test_firing_never_blocked_by_empty_ammo() {
    let mut engine = started_engine(1, 42);
    engine.ledger_mut().ammo = 0;
    engine.queue_command(PlayerCommand::Fire);
    let snap = engine.tick(DT);
    let player_shots = snap
        .projectiles
        .iter()
        .filter(|p| p.faction == Faction::Player)
        .count();
    assert_eq!(player_shots, 1, "ammo is bookkeeping, not a gate");
    assert_eq!(snap.economy.ammo, 0);
}

#[test]
fn test_mana_regen_emits_mana_changed() {
    let mut engine = started_engine(1, 42);
    for (_e, (hero, _s)) in engine.world_mut().query_mut::<(&mut Hero, &mut StatBlock)>() {
        hero.mana = 10.0;
    }
    let snap = engine.tick(DT);
    let current = snap
        .events
        .iter()
        .find_map(|e| match e {
            UiEvent::ManaChanged { current, .. } => Some(*current),
            _ => None,
        })
        .expect("regen should surface the mana gauge");
    assert!(current > 10.0);
    assert_eq!(snap.hero.mana, current);

    // A gauge pinned at max stays silent.
    for (_e, (hero, _s)) in engine.world_mut().query_mut::<(&mut Hero, &mut StatBlock)>() {
        hero.mana = hero.max_mana;
    }
    let snap = engine.tick(DT);
    assert!(!snap
        .events
        .iter()
        .any(|e| matches!(e, UiEvent::ManaChanged { .. })));
}

#[test]
fn test_health_regen_emits_health_changed() {
    let mut engine = started_engine(1, 42);
    for (_e, (_h, stats)) in engine.world_mut().query_mut::<(&mut Hero, &mut StatBlock)>() {
        stats.health = 50.0;
    }
    let snap = engine.tick(DT);
    let current = snap
        .events
        .iter()
        .find_map(|e| match e {
            UiEvent::HealthChanged { current, .. } => Some(*current),
            _ => None,
        })
        .expect("regen should surface the health gauge");
    assert!(current > 50.0);
}

#[test]
fn test_max_health_purchase_surfaces_the_new_gauge() {
    let mut engine = started_engine(1, 42);
    kill_all_enemies(&mut engine);
    engine.tick(DT);
    assert_eq!(engine.phase(), GamePhase::Shop);

    engine.queue_command(PlayerCommand::Purchase {
        item: ShopItem::MaxHealthUp,
    });
    let snap = engine.tick(DT);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, UiEvent::HealthChanged { max, .. } if *max > HERO_MAX_HEALTH)));
}

#[test]
fn test_regen_clamps_at_max_health() {
    let mut engine = started_engine(1, 42);
    for (_e, (_h, stats)) in engine.world_mut().query_mut::<(&mut Hero, &mut StatBlock)>() {
        stats.health = stats.max_health - 0.001;
    }
    for _ in 0..60 {
        engine.tick(DT);
    }
    let stats = hero_stats(&engine);
    assert!(stats.health <= stats.max_health);
    assert!((stats.health - stats.max_health).abs() < 1e-9);
}

// ---- Damage model ----

/// Park an enemy projectile on top of the hero so the resolver hits
/// next tick.
fn plant_enemy_shot(engine: &mut SimulationEngine, damage: f64) {
    let origin = hero_position(engine);
    world_setup::fire_projectile(
        engine.world_mut(),
        origin,
        Velocity::new(0.0, 0.0, 1.0),
        Faction::Enemy,
        damage,
        0.1,
        None,
    );
}

#[test]
fn test_armor_halves_damage_at_50() {
    let mut engine = started_engine(1, 42);
    for (_e, (_h, stats)) in engine.world_mut().query_mut::<(&mut Hero, &mut StatBlock)>() {
        stats.armor = 50.0;
        stats.evasion = 0.0;
    }
    plant_enemy_shot(&mut engine, 10.0);
    let snap = engine.tick(DT);
    assert_eq!(snap.hero.health, 95.0);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, UiEvent::HealthChanged { .. })));
}

#[test]
fn test_armor_mitigation_caps_at_75_percent() {
    let mut engine = started_engine(1, 42);
    for (_e, (_h, stats)) in engine.world_mut().query_mut::<(&mut Hero, &mut StatBlock)>() {
        stats.armor = 500.0;
    }
    plant_enemy_shot(&mut engine, 40.0);
    let snap = engine.tick(DT);
    assert_eq!(snap.hero.health, 90.0);
}

#[test]
fn test_full_evasion_negates_and_signals_dodge() {
    let mut engine = started_engine(1, 42);
    for (_e, (_h, stats)) in engine.world_mut().query_mut::<(&mut Hero, &mut StatBlock)>() {
        stats.evasion = 100.0;
    }
    plant_enemy_shot(&mut engine, 10.0);
    let snap = engine.tick(DT);
    assert_eq!(snap.hero.health, 100.0);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, UiEvent::Dodged { .. })));
}

#[test]
fn test_hero_death_latches_game_over() {
    let mut engine = started_engine(1, 42);
    plant_enemy_shot(&mut engine, 10_000.0);
    let snap = engine.tick(DT);
    assert_eq!(snap.phase, GamePhase::GameOver);
    assert!(snap.events.iter().any(|e| matches!(e, UiEvent::GameOver)));

    // Terminal: no further combat ticks.
    let tick_before = engine.time().tick;
    engine.tick(DT);
    assert_eq!(engine.time().tick, tick_before);

    // StartGame is only valid from the menu.
    engine.queue_command(PlayerCommand::StartGame);
    let snap = engine.tick(DT);
    assert_eq!(snap.phase, GamePhase::GameOver);

    engine.queue_command(PlayerCommand::ReturnToMenu);
    engine.queue_command(PlayerCommand::StartGame);
    let snap = engine.tick(DT);
    assert_eq!(snap.phase, GamePhase::Active);
    assert_eq!(snap.wave.number, 1);
}

// ---- Kills & economy ----

/// Park a player projectile on top of an enemy.
fn plant_player_shot_on_enemy(engine: &mut SimulationEngine, damage: f64, area: Option<f64>) {
    let target = {
        let mut q = engine.world().query::<(&Enemy, &Position)>();
        q.iter()
            .filter(|(_, (e, _))| e.alive)
            .map(|(_, (_, p))| *p)
            .next()
            .unwrap()
    };
    world_setup::fire_projectile(
        engine.world_mut(),
        target,
        Velocity::new(0.0, 0.0, 1.0),
        Faction::Player,
        damage,
        0.1,
        area,
    );
}

#[test]
fn test_kill_awards_score_and_gold() {
    let mut engine = started_engine(1, 42);
    plant_player_shot_on_enemy(&mut engine, 999.0, None);
    let snap = engine.tick(DT);

    let killed = snap
        .events
        .iter()
        .find_map(|e| match e {
            UiEvent::EnemyKilled { kind, .. } => Some(*kind),
            _ => None,
        })
        .expect("kill event expected");
    assert_eq!(snap.economy.score, crate::economy::score_value(killed));
    assert!(snap.economy.gold > STARTING_GOLD, "kill should pay gold");
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, UiEvent::ScoreChanged { .. })));
}

#[test]
fn test_dead_enemy_lingers_then_despawns() {
    let mut engine = started_engine(2, 42);
    plant_player_shot_on_enemy(&mut engine, 999.0, None);
    engine.tick(DT);

    // Corpse still present, flagged dead, excluded from the live count.
    let total = {
        let mut q = engine.world().query::<&Enemy>();
        q.iter().count()
    };
    assert_eq!(total, 2);
    assert_eq!(live_enemy_kinds(&engine).len(), 1);

    // After the linger interval the corpse is gone.
    for _ in 0..((CORPSE_LINGER_SECS / DT) as usize + 2) {
        engine.tick(DT);
    }
    let total = {
        let mut q = engine.world().query::<&Enemy>();
        q.iter().count()
    };
    assert_eq!(total, 1);
}

#[test]
fn test_area_effect_hits_all_enemies_in_radius() {
    let mut engine = started_engine(3, 42);
    // Stack every enemy on one spot so a single blast covers them all.
    for (_e, (enemy, pos)) in engine
        .world_mut()
        .query_mut::<(&mut Enemy, &mut Position)>()
    {
        if enemy.alive {
            *pos = Position::new(10.0, 0.0, 0.0);
        }
    }
    plant_player_shot_on_enemy(&mut engine, 999.0, Some(4.0));
    let snap = engine.tick(DT);

    let kills = snap
        .events
        .iter()
        .filter(|e| matches!(e, UiEvent::EnemyKilled { .. }))
        .count();
    assert_eq!(kills, 3, "blast should kill the whole stack");
}

#[test]
fn test_one_projectile_hits_one_target() {
    let mut engine = started_engine(3, 42);
    for (_e, (enemy, pos)) in engine
        .world_mut()
        .query_mut::<(&mut Enemy, &mut Position)>()
    {
        if enemy.alive {
            *pos = Position::new(10.0, 0.0, 0.0);
        }
    }
    plant_player_shot_on_enemy(&mut engine, 999.0, None);
    let snap = engine.tick(DT);

    let kills = snap
        .events
        .iter()
        .filter(|e| matches!(e, UiEvent::EnemyKilled { .. }))
        .count();
    assert_eq!(kills, 1, "a plain shot stops at its first hit");
}

#[test]
fn test_purchase_rejected_outside_shop() {
    let mut engine = started_engine(1, 42);
    let gold_before = engine.ledger().gold;
    engine.queue_command(PlayerCommand::Purchase {
        item: ShopItem::DamageUp,
    });
    let snap = engine.tick(DT);
    assert_eq!(engine.ledger().gold, gold_before);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, UiEvent::Notification { .. })));
}

#[test]
fn test_purchase_shortfall_keeps_balance() {
    let mut engine = started_engine(1, 42);
    kill_all_enemies(&mut engine);
    engine.tick(DT);
    assert_eq!(engine.phase(), GamePhase::Shop);

    engine.ledger_mut().gold = 50;
    engine.queue_command(PlayerCommand::Purchase {
        item: ShopItem::Tower, // priced at 100
    });
    engine.tick(DT);
    assert_eq!(engine.ledger().gold, 50);
}

// ---- Turrets ----

#[test]
fn test_turret_deploy_costs_gold_and_respects_cooldown() {
    let mut engine = started_engine(1, 42);
    engine.queue_command(PlayerCommand::DeployTurret { x: 5.0, z: 5.0 });
    engine.tick(DT);
    assert_eq!(engine.ledger().gold, STARTING_GOLD - TURRET_GOLD_COST);

    // Second deploy inside the cooldown window fails without charge.
    engine.queue_command(PlayerCommand::DeployTurret { x: -5.0, z: -5.0 });
    engine.tick(DT);
    assert_eq!(engine.ledger().gold, STARTING_GOLD - TURRET_GOLD_COST);

    let turrets = {
        let mut q = engine.world().query::<&Structure>();
        q.iter().count()
    };
    assert_eq!(turrets, 1);
}

#[test]
fn test_turret_deploy_spacing_check() {
    let mut engine = started_engine(1, 42);
    engine.ledger_mut().gold = 500;
    engine.queue_command(PlayerCommand::DeployTurret { x: 5.0, z: 5.0 });
    engine.tick(DT);

    // Outlast the deploy cooldown, then try to stack a second turret
    // right next to the first.
    for _ in 0..((TURRET_DEPLOY_COOLDOWN_MS / 1000.0 / DT) as usize + 2) {
        engine.tick(DT);
        if engine.phase() != GamePhase::Active {
            break;
        }
    }
    let gold_before = engine.ledger().gold;
    engine.queue_command(PlayerCommand::DeployTurret { x: 5.5, z: 5.0 });
    engine.tick(DT);
    assert_eq!(engine.ledger().gold, gold_before, "spacing violation must not charge");
}

#[test]
fn test_turret_despawns_on_ammo_exhaustion() {
    let mut engine = started_engine(1, 42);
    // Put the enemy in range of a fresh single-round turret.
    for (_e, (enemy, pos)) in engine
        .world_mut()
        .query_mut::<(&mut Enemy, &mut Position)>()
    {
        if enemy.alive {
            *pos = Position::new(0.0, 0.0, 5.0);
        }
    }
    world_setup::spawn_turret(engine.world_mut(), 2.0, 2.0);
    for (_e, (structure, stats)) in engine
        .world_mut()
        .query_mut::<(&mut Structure, &mut StatBlock)>()
    {
        assert_eq!(structure.kind, StructureKind::Turret);
        stats.ammo = 1.0;
    }

    let snap = engine.tick(DT);
    assert_eq!(
        snap.structures.len(),
        0,
        "turret fires its last round and despawns"
    );
    assert!(
        snap.projectiles
            .iter()
            .any(|p| p.faction == Faction::Player),
        "the final round is still in flight"
    );
}

// ---- Projectile subsystem (direct system tests) ----

#[test]
fn test_projectile_expires_after_lifetime() {
    let mut world = hecs::World::new();
    let mut buffer = Vec::new();
    world_setup::fire_projectile(
        &mut world,
        Position::new(0.0, 0.0, 0.0),
        Velocity::default(),
        Faction::Player,
        1.0,
        10.0,
        None,
    );

    let ticks = (PROJECTILE_MAX_LIFETIME_SECS / DT) as usize;
    for _ in 0..ticks - 2 {
        systems::projectile::run(&mut world, DT, &mut buffer);
    }
    assert_eq!(world.query_mut::<&Projectile>().into_iter().count(), 1);

    // A few more advances push the lifetime past the limit.
    for _ in 0..4 {
        systems::projectile::run(&mut world, DT, &mut buffer);
    }
    assert_eq!(world.query_mut::<&Projectile>().into_iter().count(), 0);
}

#[test]
fn test_projectile_removed_when_out_of_bounds() {
    let mut world = hecs::World::new();
    let mut buffer = Vec::new();
    world_setup::fire_projectile(
        &mut world,
        Position::new(PROJECTILE_BOUND_XZ - 0.05, 0.0, 0.0),
        Velocity::new(1.0, 0.0, 0.0),
        Faction::Player,
        1.0,
        20.0,
        None,
    );

    systems::movement::run(&mut world, DT);
    systems::projectile::run(&mut world, DT, &mut buffer);
    assert_eq!(
        world.query_mut::<&Projectile>().into_iter().count(),
        0,
        "out-of-bounds removal happens the same tick"
    );
}

// ---- Enemy attack cycle (direct system tests) ----

fn combat_world(kind: EnemyKind, enemy_z: f64) -> hecs::World {
    let mut world = hecs::World::new();
    world_setup::spawn_hero(&mut world);
    let mut rng = <rand_chacha::ChaCha8Rng as rand::SeedableRng>::seed_from_u64(1);
    let entity = world_setup::spawn_enemy(&mut world, &mut rng, kind, 1.0);
    {
        let mut pos = world.get::<&mut Position>(entity).unwrap();
        *pos = Position::new(0.0, 0.0, enemy_z);
    }
    world
}

fn enemy_shot_count(world: &mut hecs::World) -> usize {
    world
        .query_mut::<&Projectile>()
        .into_iter()
        .filter(|(_, p)| p.faction == Faction::Enemy)
        .count()
}

fn at(secs: f64) -> SimTime {
    SimTime {
        tick: (secs / DT) as u64,
        elapsed_secs: secs,
    }
}

#[test]
fn test_attack_commits_after_windup() {
    let mut world = combat_world(EnemyKind::Basic, 1.0);

    // First evaluation enters wind-up; nothing in flight yet.
    systems::enemy_ai::run(&mut world, &at(0.0));
    assert_eq!(enemy_shot_count(&mut world), 0);

    // Before the wind-up elapses, still nothing.
    systems::enemy_ai::run(&mut world, &at(ATTACK_WINDUP_MS / 1000.0 / 2.0));
    assert_eq!(enemy_shot_count(&mut world), 0);

    // Past the wind-up: the projectile is committed.
    systems::enemy_ai::run(&mut world, &at(ATTACK_WINDUP_MS / 1000.0 + 0.05));
    assert_eq!(enemy_shot_count(&mut world), 1);
}

#[test]
fn test_boss_bursts_above_half_health() {
    let mut world = combat_world(EnemyKind::Boss, 5.0);

    systems::enemy_ai::run(&mut world, &at(0.0)); // wind-up starts
    systems::enemy_ai::run(&mut world, &at(0.35)); // base release
    assert_eq!(enemy_shot_count(&mut world), 1);

    systems::enemy_ai::run(&mut world, &at(0.70)); // +300ms burst
    assert_eq!(enemy_shot_count(&mut world), 2);

    systems::enemy_ai::run(&mut world, &at(1.00)); // +600ms burst
    assert_eq!(enemy_shot_count(&mut world), 3);
}

#[test]
fn test_boss_stops_bursting_below_half_health() {
    let mut world = combat_world(EnemyKind::Boss, 5.0);
    for (_e, (enemy, stats)) in world.query_mut::<(&Enemy, &mut StatBlock)>() {
        assert_eq!(enemy.kind, EnemyKind::Boss);
        stats.health = stats.max_health / 2.0;
    }

    systems::enemy_ai::run(&mut world, &at(0.0));
    systems::enemy_ai::run(&mut world, &at(0.35));
    systems::enemy_ai::run(&mut world, &at(0.70));
    systems::enemy_ai::run(&mut world, &at(1.00));
    assert_eq!(enemy_shot_count(&mut world), 1, "no bursts at half health");
}

#[test]
fn test_dead_enemy_never_attacks() {
    let mut world = combat_world(EnemyKind::Basic, 1.0);
    for (_e, enemy) in world.query_mut::<&mut Enemy>() {
        enemy.alive = false;
    }
    systems::enemy_ai::run(&mut world, &at(0.0));
    systems::enemy_ai::run(&mut world, &at(1.0));
    assert_eq!(enemy_shot_count(&mut world), 0);
}

#[test]
fn test_ranged_enemy_holds_in_band() {
    let mut world = combat_world(EnemyKind::Ranged, 14.0);
    systems::enemy_ai::run(&mut world, &at(0.0));
    let vel = {
        let mut q = world.query::<(&Enemy, &Velocity)>();
        q.iter().map(|(_, (_, v))| *v).next().unwrap()
    };
    assert_eq!(vel.speed(), 0.0, "ranged holds inside its band");
}

// ---- Difficulty scaling ----

#[test]
fn test_difficulty_scales_non_boss_stats() {
    let mut world = hecs::World::new();
    let mut rng = <rand_chacha::ChaCha8Rng as rand::SeedableRng>::seed_from_u64(1);

    let basic = world_setup::spawn_enemy(&mut world, &mut rng, EnemyKind::Basic, 1.4);
    let stats = world.get::<&StatBlock>(basic).unwrap();
    assert_eq!(stats.health, 5.0); // ceil(3 * 1.4)
    assert_eq!(stats.damage, 2.0); // ceil(1 * 1.4)
    drop(stats);

    let boss = world_setup::spawn_enemy(&mut world, &mut rng, EnemyKind::Boss, 2.0);
    let stats = world.get::<&StatBlock>(boss).unwrap();
    assert_eq!(stats.health, 10.0, "boss stats are not wave-scaled");
}
