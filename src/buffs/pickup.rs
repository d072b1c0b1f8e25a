use crate::core::constants::{DAMAGE_AURA_ID, DAMAGE_AURA_NAME, PICKUP_RADIUS};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A collectible lying in the world that grants a power-up on contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUpPickup {
    pub position: DVec2,
    pub power_up_id: String,
    pub name: String,
    pub pickup_radius: f64,
    pub collected: bool,
}

impl PowerUpPickup {
    pub fn new(position: DVec2, power_up_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            position,
            power_up_id: power_up_id.into(),
            name: name.into(),
            pickup_radius: PICKUP_RADIUS,
            collected: false,
        }
    }

    pub fn damage_aura(position: DVec2) -> Self {
        Self::new(position, DAMAGE_AURA_ID, DAMAGE_AURA_NAME)
    }

    /// Marks the pickup collected if `player` stands within reach. Returns true on the collecting call only.
    pub fn update(&mut self, player: DVec2) -> bool {
        if self.collected || self.position.distance(player) > self.pickup_radius {
            return false;
        }
        self.collected = true;
        true
    }
}
