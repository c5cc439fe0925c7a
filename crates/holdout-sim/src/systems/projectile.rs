//! Projectile subsystem — lifetime and bounds expiry.
//!
//! Position integration happens in the movement system; this system
//! advances lifetimes and destroys projectiles that expire or leave
//! the bounded volume. Destroyed projectiles are despawned in the same
//! tick — no one-tick delay. Collision matching is NOT done here; the
//! resolver owns it to keep hit logic centralized.

use hecs::{Entity, World};

use holdout_core::components::Projectile;
use holdout_core::constants::*;
use holdout_core::types::Position;

/// Advance lifetimes and despawn expired or out-of-bounds projectiles.
pub fn run(world: &mut World, dt: f64, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (projectile, pos)) in world.query_mut::<(&mut Projectile, &Position)>() {
        projectile.lifetime_secs += dt;

        let expired = projectile.lifetime_secs > PROJECTILE_MAX_LIFETIME_SECS;
        let out_of_bounds = pos.x.abs() > PROJECTILE_BOUND_XZ
            || pos.z.abs() > PROJECTILE_BOUND_XZ
            || pos.y < 0.0
            || pos.y > PROJECTILE_MAX_Y;

        if expired || out_of_bounds {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
