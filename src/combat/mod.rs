//! Shared combatant model: stats, damage, leveling, and movement integration.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
