//! Delve - deterministic tile-based dungeon simulation.
//!
//! The library holds the whole simulation: seeded map generation, tile
//! collision, the combatant model, enemy AI, power-ups and the per-tick
//! orchestrator. Front-ends (the terminal binary, the headless simulator)
//! only feed input and read snapshots.

pub mod assets;
pub mod buffs;
pub mod combat;
pub mod core;
pub mod dungeon;
pub mod effects;
pub mod enemy;
pub mod input;
pub mod physics;
pub mod simulator;
