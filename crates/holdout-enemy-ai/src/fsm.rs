//! Enemy steering finite state machine.
//!
//! Pure functions that compute the Seeking/Attacking state and the
//! movement velocity for one enemy based on its distance to the hero.
//! The state is recomputed from distance alone every tick; there is no
//! hysteresis band, so an enemy sitting exactly at attack range may
//! oscillate between states. That is documented behavior, not a bug.

use holdout_core::constants::{OFFSET_COLLAPSE_RANGE, RANGED_HOLD_BAND};
use holdout_core::enums::AiState;
use holdout_core::types::{Position, Velocity};

use crate::profiles::EnemyProfile;

/// Melee enemies keep pressing into the hero while attacking, but stop
/// once practically on top of them to avoid jitter.
const MELEE_STANDOFF: f64 = 0.5;

/// Input to the steering FSM for a single enemy.
pub struct SteerContext<'a> {
    pub profile: &'a EnemyProfile,
    pub state: AiState,
    pub position: Position,
    pub hero_position: Position,
    /// Per-instance random approach offset (x/z), fixed at spawn.
    pub offset_x: f64,
    pub offset_z: f64,
    pub distance_to_hero: f64,
}

/// Output from the steering FSM.
pub struct SteerUpdate {
    pub new_state: AiState,
    pub velocity: Velocity,
    pub state_changed: bool,
}

/// Evaluate one enemy. Returns the new state and movement velocity
/// (units/s; the caller integrates by dt).
pub fn evaluate(ctx: &SteerContext) -> SteerUpdate {
    let dist = ctx.distance_to_hero;
    let new_state = if dist > ctx.profile.attack_range {
        AiState::Seeking
    } else {
        AiState::Attacking
    };

    let velocity = match new_state {
        AiState::Seeking => seek_velocity(ctx),
        AiState::Attacking => {
            if ctx.profile.holds_at_range {
                // Ideal band: attack_range - RANGED_HOLD_BAND up to
                // attack_range. Hold inside it; back off when the hero
                // pushes below the band floor.
                if dist < ctx.profile.attack_range - RANGED_HOLD_BAND {
                    toward(ctx.hero_position, ctx.position, ctx.profile.speed)
                } else {
                    Velocity::default()
                }
            } else if dist > MELEE_STANDOFF {
                // Melee keeps converging on the unoffset hero position.
                toward(ctx.position, ctx.hero_position, ctx.profile.speed)
            } else {
                Velocity::default()
            }
        }
    };

    SteerUpdate {
        new_state,
        velocity,
        state_changed: new_state != ctx.state,
    }
}

/// Seeking movement: head for the hero plus the approach offset, with
/// the offset linearly collapsed as the enemy closes inside
/// OFFSET_COLLAPSE_RANGE so the pack disperses at range but converges
/// near the hero.
fn seek_velocity(ctx: &SteerContext) -> Velocity {
    let blend = (ctx.distance_to_hero / OFFSET_COLLAPSE_RANGE).clamp(0.0, 1.0);
    let target = Position::new(
        ctx.hero_position.x + ctx.offset_x * blend,
        ctx.hero_position.y,
        ctx.hero_position.z + ctx.offset_z * blend,
    );
    toward(ctx.position, target, ctx.profile.speed)
}

/// Velocity of magnitude `speed` pointing from `from` to `to` on the
/// combat plane. Zero when already at the target.
fn toward(from: Position, to: Position, speed: f64) -> Velocity {
    let dx = to.x - from.x;
    let dz = to.z - from.z;
    let len = (dx * dx + dz * dz).sqrt();
    if len < f64::EPSILON {
        return Velocity::default();
    }
    Velocity::new(dx / len * speed, 0.0, dz / len * speed)
}
