//! Cleanup system — despawns corpses after their cosmetic linger.
//!
//! Enemies flagged dead are already out of play (never targeted,
//! never counted); this just removes the entity once the linger
//! interval passes. Uses a pre-allocated buffer to avoid per-tick
//! allocation.

use hecs::{Entity, World};

use holdout_core::components::Enemy;
use holdout_core::constants::CORPSE_LINGER_SECS;
use holdout_core::types::SimTime;

/// Remove dead enemies whose corpse interval has elapsed.
pub fn run(world: &mut World, time: &SimTime, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, enemy) in world.query_mut::<&Enemy>() {
        if !enemy.alive && time.elapsed_secs - enemy.died_at_secs >= CORPSE_LINGER_SECS {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
