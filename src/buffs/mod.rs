//! Power-ups: lifecycle, the damage aura, the per-owner manager and world pickups.

pub mod aura;
pub mod manager;
pub mod pickup;
pub mod types;

pub use aura::{aura_crit_chance, aura_damage, aura_radius, damage_aura, DamageAura};
pub use manager::{PowerUpFactory, PowerUpManager};
pub use pickup::PowerUpPickup;
pub use types::{AuraStrike, BuffContext, BuffDuration, BuffStatus, PowerUp, PowerUpEffect};
