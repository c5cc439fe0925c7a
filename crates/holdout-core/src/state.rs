//! Game state snapshot — the complete visible state produced each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::UiEvent;
use crate::types::{Position, SimTime};

/// Complete game state handed to the rendering layer after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub hero: HeroView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub structures: Vec<StructureView>,
    pub wave: WaveView,
    pub economy: EconomyView,
    pub events: Vec<UiEvent>,
}

/// Hero status for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeroView {
    pub position: Position,
    /// Facing direction on the x/z plane (unit vector).
    pub facing_x: f64,
    pub facing_z: f64,
    pub health: f64,
    pub max_health: f64,
    pub mana: f64,
    pub max_mana: f64,
    pub damage: f64,
    pub attack_speed: f64,
    pub armor: f64,
    pub evasion: f64,
}

/// A visible enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub kind: EnemyKind,
    pub position: Position,
    pub health: f64,
    pub max_health: f64,
    pub state: AiState,
    /// False while the corpse lingers for its cosmetic interval.
    pub alive: bool,
}

/// A live projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub faction: Faction,
    /// Blast radius for area-effect shots, if any.
    pub area_radius: Option<f64>,
}

/// A deployed structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureView {
    pub kind: StructureKind,
    pub position: Position,
    pub health: f64,
    /// Remaining ammo (turrets only; towers report None).
    pub ammo: Option<u32>,
}

/// Wave progress for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub number: u32,
    pub difficulty: f64,
    pub enemies_remaining: u32,
}

/// Resource counters for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EconomyView {
    pub score: u32,
    pub gold: u32,
    pub ammo: u32,
}
