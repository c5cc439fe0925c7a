//! Headless scripted run — exercises the engine without a frontend.
//!
//! Useful for profiling and for eyeballing balance via the log stream.

use holdout_core::commands::PlayerCommand;
use holdout_core::constants::DT;
use holdout_core::enums::GamePhase;
use holdout_sim::{SimConfig, SimulationEngine};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_command(PlayerCommand::StartGame);
    engine.queue_command(PlayerCommand::SetFacing { x: 0.0, z: 1.0 });

    // Five simulated minutes: hold the trigger, hop back into combat
    // whenever a wave clears.
    for _ in 0..(5 * 60 * 60) {
        engine.queue_command(PlayerCommand::Fire);
        let snapshot = engine.tick(DT);

        match snapshot.phase {
            GamePhase::Shop => engine.queue_command(PlayerCommand::StartNextWave),
            GamePhase::GameOver => break,
            _ => {}
        }
    }

    let final_snapshot = engine.tick(DT);
    tracing::info!(
        wave = final_snapshot.wave.number,
        score = final_snapshot.economy.score,
        gold = final_snapshot.economy.gold,
        phase = ?final_snapshot.phase,
        "run finished"
    );
}
