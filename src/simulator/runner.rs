//! Headless runner: drives a full session through `game_tick` with scripted input.

use super::config::SimConfig;
use super::report::SimReport;
use super::script::ScriptedInput;
use crate::core::game_state::GameState;
use crate::core::tick::{game_tick, TickEvent};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Below this share of max health the scripted player drinks a potion.
const POTION_THRESHOLD: f64 = 0.4;

/// Run one session and return its report. Same config, same report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut state = GameState::with_map_size(config.seed, config.map_width, config.map_height);
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed as u64);
    let mut input = ScriptedInput::new(config.script);

    if config.verbosity >= 1 {
        log::info!(
            "simulating seed {} for up to {} ticks ({} rooms, {} enemies)",
            config.seed,
            config.max_ticks,
            state.dungeon.rooms().len(),
            state.enemies.len()
        );
    }

    let mut ticks_run = 0;
    while ticks_run < config.max_ticks && state.is_running {
        let hud = state.hud();
        if hud.potions > 0 && (hud.health as f64) < hud.max_health as f64 * POTION_THRESHOLD {
            input.press_potion();
        }
        input.advance(config.delta_time);

        let result = game_tick(&mut state, &mut input, config.delta_time, &mut rng);
        ticks_run += 1;

        if config.verbosity >= 2 {
            for event in &result.events {
                if !matches!(event, TickEvent::AuraStrike { .. }) {
                    println!("[{:>7}] {}", ticks_run, event.message());
                }
            }
        }
    }

    SimReport::from_state(&state, ticks_run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::config::ScriptKind;

    fn short(seed: u32, script: ScriptKind) -> SimConfig {
        SimConfig {
            seed,
            max_ticks: 600,
            script,
            verbosity: 0,
            ..SimConfig::default()
        }
    }

    #[test]
    fn test_run_is_reproducible() {
        let a = run_simulation(&short(2024, ScriptKind::Patrol));
        let b = run_simulation(&short(2024, ScriptKind::Patrol));
        assert_eq!(a, b);
    }

    #[test]
    fn test_run_stops_at_tick_limit() {
        let report = run_simulation(&short(5, ScriptKind::Idle));
        assert!(report.ticks_run <= 600);
        if report.survived {
            assert_eq!(report.ticks_run, 600);
        }
    }
}
