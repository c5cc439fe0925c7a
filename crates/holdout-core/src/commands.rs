//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::ShopItem;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session control ---
    /// Start a new run: spawns the hero and the first wave.
    StartGame,
    /// Pause the simulation (Active only).
    Pause,
    /// Resume from pause.
    Resume,
    /// Leave a finished run and return to the menu.
    ReturnToMenu,

    // --- Combat input ---
    /// Set the current movement intent (normalized on the x/z plane;
    /// zero vector means standing still).
    SetMoveIntent { x: f64, z: f64 },
    /// Set the facing direction used for hero shots.
    SetFacing { x: f64, z: f64 },
    /// Edge-triggered fire intent for this tick.
    Fire,

    // --- Progression ---
    /// Purchase a shop item (Shop phase only).
    Purchase { item: ShopItem },
    /// Deploy a turret at a world position (Active phase).
    DeployTurret { x: f64, z: f64 },
    /// Leave the shop and spawn the next wave.
    StartNextWave,
}
