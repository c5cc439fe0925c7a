//! Simulation constants and tuning parameters.

// --- Clock ---

/// Reference tick rate (Hz) for the headless runner and tests.
/// The engine itself accepts whatever dt the frame clock supplies.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the reference rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Arena bounds ---

/// Half-extent of the playable arena on x and z (units).
pub const ARENA_HALF_EXTENT: f64 = 28.0;

/// Projectiles are destroyed once |x| or |z| exceeds this (units).
pub const PROJECTILE_BOUND_XZ: f64 = 30.0;

/// Projectiles are destroyed below y = 0 or above this altitude.
pub const PROJECTILE_MAX_Y: f64 = 20.0;

/// Maximum projectile lifetime (seconds).
pub const PROJECTILE_MAX_LIFETIME_SECS: f64 = 5.0;

// --- Damage model ---

/// Armor mitigation cap: at most 75% of incoming damage is absorbed.
pub const ARMOR_MITIGATION_CAP: f64 = 0.75;

/// Collision radius used when a target has no hitbox stat set.
pub const DEFAULT_HITBOX_SIZE: f64 = 1.2;

// --- Hero ---

pub const HERO_MAX_HEALTH: f64 = 100.0;
pub const HERO_SPEED: f64 = 5.0;
pub const HERO_DAMAGE: f64 = 1.0;
/// Hero shots per second; cooldown is 1000/attack_speed ms.
pub const HERO_ATTACK_SPEED: f64 = 2.0;
/// Health regenerated per second, clamped to max.
pub const HERO_HEALTH_REGEN: f64 = 0.5;
pub const HERO_MAX_MANA: f64 = 100.0;
/// Mana regenerated per second, clamped to max.
pub const HERO_MANA_REGEN: f64 = 2.0;
pub const HERO_PROJECTILE_SPEED: f64 = 20.0;

// --- Enemy baseline (Basic); other kinds are multipliers on these ---

pub const ENEMY_BASE_HEALTH: f64 = 3.0;
pub const ENEMY_BASE_SPEED: f64 = 2.0;
pub const ENEMY_BASE_DAMAGE: f64 = 1.0;
pub const ENEMY_BASE_ATTACK_RANGE: f64 = 1.5;
pub const ENEMY_BASE_ATTACK_SPEED: f64 = 1.0;
pub const ENEMY_BASE_HITBOX: f64 = 2.0;
pub const ENEMY_PROJECTILE_SPEED: f64 = 8.0;

/// Radius of the per-instance random approach offset (units).
pub const APPROACH_OFFSET_RADIUS: f64 = 3.0;

/// Distance below which the approach offset collapses toward the
/// unoffset hero position (units).
pub const OFFSET_COLLAPSE_RANGE: f64 = 8.0;

/// Width of the hold band for ranged enemies: they hold position
/// inside `attack_range - RANGED_HOLD_BAND .. attack_range` and back
/// away when the hero closes below the band floor.
pub const RANGED_HOLD_BAND: f64 = 3.0;

/// Attack wind-up delay before a projectile is committed (ms).
/// Direction is computed at commit time, so wind-ups can be dodged.
pub const ATTACK_WINDUP_MS: f64 = 300.0;

/// Boss extra burst offsets after the base release (ms), active above
/// half health.
pub const BOSS_BURST_OFFSETS_MS: [f64; 2] = [300.0, 600.0];

/// Cosmetic interval a dead enemy lingers before despawn (seconds).
pub const CORPSE_LINGER_SECS: f64 = 1.0;

// --- Waves ---

/// Enemies in wave 1; each wave adds ENEMIES_PER_WAVE_STEP.
pub const BASE_ENEMIES_PER_WAVE: u32 = 5;

/// Additional enemies per wave number.
pub const ENEMIES_PER_WAVE_STEP: u32 = 2;

/// Difficulty multiplier step per wave: 1 + (n-1) * this.
pub const WAVE_DIFFICULTY_STEP: f64 = 0.2;

/// Every Nth wave is a boss wave.
pub const BOSS_WAVE_INTERVAL: u32 = 5;

/// Boss-wave minion split: this share fast, remainder basic.
pub const BOSS_MINION_FAST_SHARE: f64 = 0.7;

/// Enemy spawn ring radii from the world origin (units).
pub const SPAWN_RADIUS_MIN: f64 = 15.0;
pub const SPAWN_RADIUS_MAX: f64 = 20.0;

// --- Economy ---

pub const STARTING_GOLD: u32 = 100;
pub const STARTING_AMMO: u32 = 50;

/// Probability of an ammo drop on a non-boss kill.
pub const AMMO_BONUS_CHANCE: f64 = 0.15;
/// Ammo granted by a non-boss drop.
pub const AMMO_BONUS_AMOUNT: u32 = 3;
/// Ammo always granted by a boss kill.
pub const BOSS_AMMO_BONUS: u32 = 15;

/// Gold jitter: award is scaled by a uniform draw in [1-j, 1+j).
pub const GOLD_JITTER: f64 = 0.2;

// --- Structures ---

pub const TURRET_GOLD_COST: u32 = 50;
pub const TURRET_MAX_HEALTH: f64 = 30.0;
pub const TURRET_AMMO: f64 = 40.0;
pub const TURRET_RANGE: f64 = 12.0;
pub const TURRET_DAMAGE: f64 = 1.0;
pub const TURRET_ATTACK_SPEED: f64 = 1.5;
pub const TURRET_PROJECTILE_SPEED: f64 = 16.0;
/// Cooldown between turret deployments (ms).
pub const TURRET_DEPLOY_COOLDOWN_MS: f64 = 5000.0;

pub const TOWER_RANGE: f64 = 14.0;
pub const TOWER_DAMAGE: f64 = 2.0;
pub const TOWER_ATTACK_SPEED: f64 = 0.8;
pub const TOWER_MAX_HEALTH: f64 = 50.0;

/// Minimum spacing between any two structures (units).
pub const STRUCTURE_MIN_SPACING: f64 = 2.5;

/// Towers bought in the shop are placed on this ring around the origin.
pub const TOWER_SLOT_RADIUS: f64 = 6.0;
pub const TOWER_SLOT_COUNT: usize = 8;
