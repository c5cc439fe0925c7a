//! Enemy steering FSM and per-kind behavior profiles for HOLDOUT.
//!
//! Pure functions operating on plain data — no ECS dependency. The
//! simulation crate feeds each enemy's situation in and applies the
//! resulting state/velocity update.

pub mod fsm;
pub mod profiles;
