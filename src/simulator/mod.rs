//! Headless simulator.
//!
//! Drives the real `game_tick` with scripted input and a seeded gameplay rng,
//! so a seed and a config always reproduce the same session.

mod config;
mod report;
mod runner;
mod script;

pub use config::{ConfigError, ScriptKind, SimConfig};
pub use report::SimReport;
pub use runner::run_simulation;
pub use script::ScriptedInput;
