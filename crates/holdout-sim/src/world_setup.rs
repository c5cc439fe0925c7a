//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the hero, enemy, structure, and projectile entities with
//! appropriate component bundles.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use holdout_core::components::{Enemy, Hero, Projectile, Structure};
use holdout_core::constants::*;
use holdout_core::enums::{AiState, AttackPhase, EnemyKind, Faction, StructureKind};
use holdout_core::stats::StatBlock;
use holdout_core::types::{Position, Velocity};

use holdout_enemy_ai::profiles::get_profile;

/// Spawn the hero at the arena origin with default combat stats.
pub fn spawn_hero(world: &mut World) -> hecs::Entity {
    let stats = StatBlock {
        health: HERO_MAX_HEALTH,
        max_health: HERO_MAX_HEALTH,
        damage: HERO_DAMAGE,
        speed: HERO_SPEED,
        attack_speed: HERO_ATTACK_SPEED,
        armor: 0.0,
        evasion: 0.0,
        hitbox_size: DEFAULT_HITBOX_SIZE,
        ..Default::default()
    };

    let hero = Hero {
        move_x: 0.0,
        move_z: 0.0,
        facing_x: 0.0,
        facing_z: 1.0,
        mana: HERO_MAX_MANA,
        max_mana: HERO_MAX_MANA,
        mana_regen: HERO_MANA_REGEN,
        health_regen: HERO_HEALTH_REGEN,
        last_shot_ms: f64::NEG_INFINITY,
    };

    world.spawn((hero, Position::new(0.0, 0.0, 0.0), stats))
}

/// Spawn a single enemy on the spawn ring.
///
/// Stats come from the kind's profile row; wave difficulty multiplies
/// health and damage (ceiling-rounded) for every non-boss kind. The
/// per-instance approach offset is drawn here and fixed for life.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    kind: EnemyKind,
    difficulty: f64,
) -> hecs::Entity {
    let profile = get_profile(kind);

    let (health, damage) = if kind == EnemyKind::Boss {
        (profile.health, profile.damage)
    } else {
        (
            (profile.health * difficulty).ceil(),
            (profile.damage * difficulty).ceil(),
        )
    };

    let stats = StatBlock {
        health,
        max_health: health,
        damage,
        speed: profile.speed,
        attack_range: profile.attack_range,
        attack_speed: profile.attack_speed,
        hitbox_size: profile.hitbox_size,
        ..Default::default()
    };

    // Random point on the spawn ring around the origin.
    let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    let radius: f64 = rng.gen_range(SPAWN_RADIUS_MIN..SPAWN_RADIUS_MAX);
    let position = Position::new(radius * angle.cos(), 0.0, radius * angle.sin());

    // Approach offset: random point in a disc, so the pack spreads out.
    let offset_angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    let offset_radius: f64 = rng.gen_range(0.0..APPROACH_OFFSET_RADIUS);

    let enemy = Enemy {
        kind,
        state: AiState::Seeking,
        offset_x: offset_radius * offset_angle.cos(),
        offset_z: offset_radius * offset_angle.sin(),
        attack_phase: AttackPhase::Idle,
        phase_entered_ms: 0.0,
        next_attack_ms: 0.0,
        pending_bursts: Vec::new(),
        alive: true,
        died_at_secs: 0.0,
    };

    world.spawn((enemy, position, Velocity::default(), stats))
}

/// Fire a projectile: normalizes the direction and spawns the entity
/// with its velocity baked in. Returns the projectile handle.
pub fn fire_projectile(
    world: &mut World,
    origin: Position,
    direction: Velocity,
    faction: Faction,
    damage: f64,
    speed: f64,
    area_radius: Option<f64>,
) -> hecs::Entity {
    let len = direction.speed();
    let velocity = if len < f64::EPSILON {
        Velocity::default()
    } else {
        Velocity::new(
            direction.x / len * speed,
            direction.y / len * speed,
            direction.z / len * speed,
        )
    };

    let projectile = Projectile {
        faction,
        damage,
        lifetime_secs: 0.0,
        area_radius,
    };

    world.spawn((projectile, origin, velocity))
}

/// Deploy a turret at a world position. Turrets carry finite ammo in
/// their stat block and despawn once it runs out.
pub fn spawn_turret(world: &mut World, x: f64, z: f64) -> hecs::Entity {
    let stats = StatBlock {
        health: TURRET_MAX_HEALTH,
        max_health: TURRET_MAX_HEALTH,
        damage: TURRET_DAMAGE,
        attack_range: TURRET_RANGE,
        attack_speed: TURRET_ATTACK_SPEED,
        ammo: TURRET_AMMO,
        ..Default::default()
    };

    world.spawn((
        Structure {
            kind: StructureKind::Turret,
            next_shot_ms: 0.0,
        },
        Position::new(x, 0.0, z),
        stats,
    ))
}

/// Build a tower on the slot ring. Towers have no ammo limit.
pub fn spawn_tower(world: &mut World, x: f64, z: f64) -> hecs::Entity {
    let stats = StatBlock {
        health: TOWER_MAX_HEALTH,
        max_health: TOWER_MAX_HEALTH,
        damage: TOWER_DAMAGE,
        attack_range: TOWER_RANGE,
        attack_speed: TOWER_ATTACK_SPEED,
        ..Default::default()
    };

    world.spawn((
        Structure {
            kind: StructureKind::Tower,
            next_shot_ms: 0.0,
        },
        Position::new(x, 0.0, z),
        stats,
    ))
}
