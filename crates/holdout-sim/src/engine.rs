//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player
//! commands, runs all systems in fixed order, and produces
//! `GameStateSnapshot`s. Completely headless (no rendering
//! dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use holdout_core::commands::PlayerCommand;
use holdout_core::components::Hero;
use holdout_core::constants::*;
use holdout_core::enums::{GamePhase, ShopItem};
use holdout_core::stats::StatBlock;
use holdout_core::errors::CommandError;
use holdout_core::events::UiEvent;
use holdout_core::state::GameStateSnapshot;
use holdout_core::types::{Position, SimTime};

use crate::economy::EconomyLedger;
use crate::shop;
use crate::systems;
use crate::waves::WaveDirector;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Enemies in wave 1 (shrinkable for tests).
    pub base_per_wave: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            base_per_wave: BASE_ENEMIES_PER_WAVE,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    ui_events: Vec<UiEvent>,
    wave: WaveDirector,
    ledger: EconomyLedger,
    base_per_wave: u32,
    /// Edge-triggered fire intent, consumed by the next Active tick.
    fire_requested: bool,
    /// Timestamp (ms) of the last turret deployment.
    last_turret_deploy_ms: f64,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            ui_events: Vec::new(),
            wave: WaveDirector::new(config.base_per_wave),
            ledger: EconomyLedger::default(),
            base_per_wave: config.base_per_wave,
            fire_requested: false,
            last_turret_deploy_ms: f64::NEG_INFINITY,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick of `dt` seconds (supplied by
    /// the external frame clock) and return the resulting snapshot.
    pub fn tick(&mut self, dt: f64) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems(dt);
            self.time.advance(dt);
        }
        // Stale fire intents do not survive into later ticks.
        self.fire_requested = false;

        let events = std::mem::take(&mut self.ui_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.wave,
            &self.ledger,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the economy ledger.
    pub fn ledger(&self) -> &EconomyLedger {
        &self.ledger
    }

    /// Get a read-only reference to the wave director.
    pub fn wave(&self) -> &WaveDirector {
        &self.wave
    }

    /// Mutable world access for tests that set up bespoke scenarios.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn ledger_mut(&mut self) -> &mut EconomyLedger {
        &mut self.ledger
    }

    /// Process all queued commands. Failures become notifications; the
    /// command mutates nothing in that case.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(err) = self.handle_command(command) {
                tracing::debug!(%err, "command rejected");
                self.ui_events.push(UiEvent::Notification {
                    text: err.to_string(),
                    duration_ms: 2000,
                });
            }
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) -> Result<(), CommandError> {
        match command {
            PlayerCommand::StartGame => {
                if self.phase != GamePhase::MainMenu {
                    return Err(CommandError::WrongPhase { phase: self.phase });
                }
                self.world.clear();
                self.time = SimTime::default();
                self.ledger = EconomyLedger::new_run();
                self.wave = WaveDirector::new(self.base_per_wave);
                self.last_turret_deploy_ms = f64::NEG_INFINITY;
                world_setup::spawn_hero(&mut self.world);
                self.start_wave();
                self.phase = GamePhase::Active;
                Ok(())
            }
            PlayerCommand::Pause => {
                if self.phase != GamePhase::Active {
                    return Err(CommandError::WrongPhase { phase: self.phase });
                }
                self.phase = GamePhase::Paused;
                Ok(())
            }
            PlayerCommand::Resume => {
                if self.phase != GamePhase::Paused {
                    return Err(CommandError::WrongPhase { phase: self.phase });
                }
                self.phase = GamePhase::Active;
                Ok(())
            }
            PlayerCommand::ReturnToMenu => {
                if !matches!(
                    self.phase,
                    GamePhase::GameOver | GamePhase::Paused | GamePhase::Shop
                ) {
                    return Err(CommandError::WrongPhase { phase: self.phase });
                }
                self.world.clear();
                self.phase = GamePhase::MainMenu;
                Ok(())
            }
            PlayerCommand::SetMoveIntent { x, z } => {
                let (x, z) = normalize_intent(x, z);
                for (_entity, hero) in self.world.query_mut::<&mut Hero>() {
                    hero.move_x = x;
                    hero.move_z = z;
                }
                Ok(())
            }
            PlayerCommand::SetFacing { x, z } => {
                let len = (x * x + z * z).sqrt();
                if len > f64::EPSILON {
                    for (_entity, hero) in self.world.query_mut::<&mut Hero>() {
                        hero.facing_x = x / len;
                        hero.facing_z = z / len;
                    }
                }
                Ok(())
            }
            PlayerCommand::Fire => {
                self.fire_requested = true;
                Ok(())
            }
            PlayerCommand::Purchase { item } => {
                if self.phase != GamePhase::Shop {
                    return Err(CommandError::WrongPhase { phase: self.phase });
                }
                shop::purchase(&mut self.world, &mut self.ledger, item)?;
                self.ui_events.push(UiEvent::GoldChanged {
                    value: self.ledger.gold,
                });
                if self.ledger.ammo > 0 {
                    self.ui_events.push(UiEvent::AmmoChanged {
                        value: self.ledger.ammo,
                    });
                }
                // Health-affecting upgrades surface the new gauge.
                if item == ShopItem::MaxHealthUp {
                    let gauge = {
                        let mut q = self.world.query::<(&Hero, &StatBlock)>();
                        q.iter().map(|(_, (_, s))| (s.health, s.max_health)).next()
                    };
                    if let Some((current, max)) = gauge {
                        self.ui_events.push(UiEvent::HealthChanged { current, max });
                    }
                }
                Ok(())
            }
            PlayerCommand::DeployTurret { x, z } => {
                if !matches!(self.phase, GamePhase::Active | GamePhase::Shop) {
                    return Err(CommandError::WrongPhase { phase: self.phase });
                }
                self.deploy_turret(x, z)
            }
            PlayerCommand::StartNextWave => {
                if self.phase != GamePhase::Shop {
                    return Err(CommandError::WrongPhase { phase: self.phase });
                }
                self.start_wave();
                self.phase = GamePhase::Active;
                Ok(())
            }
        }
    }

    /// Validate and place a turret. All checks run before any state
    /// mutation, so a failed deploy has no side effects.
    fn deploy_turret(&mut self, x: f64, z: f64) -> Result<(), CommandError> {
        if x.abs() > ARENA_HALF_EXTENT || z.abs() > ARENA_HALF_EXTENT {
            return Err(CommandError::OutOfArena { x, z });
        }

        let now_ms = self.time.elapsed_ms();
        let since_last = now_ms - self.last_turret_deploy_ms;
        if since_last < TURRET_DEPLOY_COOLDOWN_MS {
            return Err(CommandError::TurretCooldown {
                remaining_ms: TURRET_DEPLOY_COOLDOWN_MS - since_last,
            });
        }

        let spot = Position::new(x, 0.0, z);
        let too_close = {
            let mut q = self
                .world
                .query::<(&holdout_core::components::Structure, &Position)>();
            q.iter()
                .any(|(_, (_, pos))| pos.horizontal_range_to(&spot) < STRUCTURE_MIN_SPACING)
        };
        if too_close {
            return Err(CommandError::TooCloseToStructure {
                min_spacing: STRUCTURE_MIN_SPACING,
            });
        }

        self.ledger.spend(TURRET_GOLD_COST)?;
        world_setup::spawn_turret(&mut self.world, x, z);
        self.last_turret_deploy_ms = now_ms;
        self.ui_events.push(UiEvent::GoldChanged {
            value: self.ledger.gold,
        });
        Ok(())
    }

    /// Spawn the next wave's enemies.
    fn start_wave(&mut self) {
        let n = self.wave.advance();
        let kinds = self.wave.compose(n, &mut self.rng);
        let difficulty = self.wave.difficulty;
        let count = kinds.len();
        for kind in kinds {
            world_setup::spawn_enemy(&mut self.world, &mut self.rng, kind, difficulty);
        }
        tracing::info!(wave = n, enemies = count, difficulty, "wave spawned");
        self.ui_events.push(UiEvent::WaveChanged { number: n });
        self.ui_events.push(UiEvent::Notification {
            text: format!("Wave {n}"),
            duration_ms: 2000,
        });
    }

    /// Run all systems in order. The order is significant:
    /// hero -> enemy AI -> kinematics -> projectile expiry ->
    /// collision/damage -> structures -> cleanup -> wave check.
    fn run_systems(&mut self, dt: f64) {
        // 1. Hero: movement intent, regen, cooldown-gated firing.
        let fired = systems::hero::run(
            &mut self.world,
            &self.time,
            dt,
            self.fire_requested,
            &mut self.ledger,
            &mut self.ui_events,
        );
        if fired {
            self.ui_events.push(UiEvent::AmmoChanged {
                value: self.ledger.ammo,
            });
        }

        // 2. Enemy AI: steering + wind-up/release attack cycle.
        systems::enemy_ai::run(&mut self.world, &self.time);

        // 3. Kinematic integration (enemies, projectiles).
        systems::movement::run(&mut self.world, dt);

        // 4. Projectile lifetime/bounds expiry (same-tick despawn).
        systems::projectile::run(&mut self.world, dt, &mut self.despawn_buffer);

        // 5. Collision & damage resolution.
        let outcome = systems::collision::run(
            &mut self.world,
            &mut self.rng,
            &self.time,
            &mut self.ui_events,
            &mut self.despawn_buffer,
        );

        for (kind, position) in outcome.kills {
            let reward = self.ledger.award_kill(kind, self.wave.number, &mut self.rng);
            tracing::debug!(?kind, score = reward.score, gold = reward.gold, "enemy killed");
            self.ui_events.push(UiEvent::EnemyKilled { kind, position });
            self.ui_events.push(UiEvent::ScoreChanged {
                value: self.ledger.score,
            });
            self.ui_events.push(UiEvent::GoldChanged {
                value: self.ledger.gold,
            });
            if reward.ammo > 0 {
                self.ui_events.push(UiEvent::AmmoChanged {
                    value: self.ledger.ammo,
                });
            }
        }

        if outcome.hero_died {
            // Game over is latched and terminal: the rest of the tick
            // is short-circuited and no further combat ticks run.
            self.phase = GamePhase::GameOver;
            self.ui_events.push(UiEvent::GameOver);
            self.ui_events.push(UiEvent::Notification {
                text: "You fell".to_string(),
                duration_ms: 4000,
            });
            tracing::info!(
                wave = self.wave.number,
                score = self.ledger.score,
                "game over"
            );
            return;
        }

        // 6. Structures: targeting, firing, ammo exhaustion.
        systems::structures::run(&mut self.world, &self.time, &mut self.despawn_buffer);

        // 7. Corpse cleanup.
        systems::cleanup::run(&mut self.world, &self.time, &mut self.despawn_buffer);

        // 8. Wave completion -> shop transition.
        if self.wave.is_wave_complete(&self.world) {
            let number = self.wave.number;
            tracing::info!(wave = number, "wave complete");
            self.ui_events.push(UiEvent::WaveComplete { number });
            self.ui_events.push(UiEvent::Notification {
                text: format!("Wave {number} cleared"),
                duration_ms: 3000,
            });
            self.phase = GamePhase::Shop;
        }
    }
}

/// Normalize a movement intent vector; oversized input is scaled down,
/// zero stays zero.
fn normalize_intent(x: f64, z: f64) -> (f64, f64) {
    let len = (x * x + z * z).sqrt();
    if len > 1.0 {
        (x / len, z / len)
    } else {
        (x, z)
    }
}
