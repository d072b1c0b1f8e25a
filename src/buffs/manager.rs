//! Registry and lifecycle owner for the player's active power-ups.

use super::aura::damage_aura;
use super::types::{AuraStrike, BuffContext, BuffStatus, PowerUp};
use crate::combat::{Combatant, EntityId};
use crate::core::constants::DAMAGE_AURA_ID;
use rand::RngCore;
use std::collections::BTreeMap;

pub type PowerUpFactory = fn() -> PowerUp;

#[derive(Debug)]
pub struct PowerUpManager {
    owner: EntityId,
    factories: BTreeMap<String, PowerUpFactory>,
    active: Vec<PowerUp>,
}

impl PowerUpManager {
    /// Empty registry bound to `owner`.
    pub fn new(owner: EntityId) -> Self {
        Self {
            owner,
            factories: BTreeMap::new(),
            active: Vec::new(),
        }
    }

    /// Registry with every built-in power-up.
    pub fn with_defaults(owner: EntityId) -> Self {
        let mut manager = Self::new(owner);
        manager.register(DAMAGE_AURA_ID, damage_aura);
        manager
    }

    pub fn owner(&self) -> EntityId {
        self.owner
    }

    pub fn register(&mut self, id: impl Into<String>, factory: PowerUpFactory) {
        self.factories.insert(id.into(), factory);
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    /// Activates `id`, or renews it if already active. `None` for an unknown id.
    pub fn add(&mut self, id: &str) -> Option<&PowerUp> {
        if let Some(index) = self.active.iter().position(|p| p.id == id) {
            let existing = &mut self.active[index];
            existing.renew();
            log::debug!("power-up {} renewed", existing.name);
            return Some(existing);
        }

        let Some(factory) = self.factories.get(id) else {
            log::warn!("unknown power-up id: {}", id);
            return None;
        };

        let mut power_up = factory();
        power_up.activate(self.owner);
        log::debug!("power-up {} added", power_up.name);
        self.active.push(power_up);
        self.active.last()
    }

    /// Deactivates and discards `id`. Returns false if it was not active.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(index) = self.active.iter().position(|p| p.id == id) else {
            log::warn!("cannot remove inactive power-up: {}", id);
            return false;
        };
        let mut power_up = self.active.remove(index);
        power_up.deactivate();
        log::debug!("power-up {} removed", power_up.name);
        true
    }

    /// Advances every active power-up against `enemies` and drops expired ones.
    ///
    /// If the owner is gone every power-up is released first and nothing ticks.
    pub fn update(
        &mut self,
        delta_time: f64,
        owner: Option<&Combatant>,
        enemies: &mut [Combatant],
        rng: &mut dyn RngCore,
    ) -> Vec<AuraStrike> {
        let owner = match owner {
            Some(owner) if owner.id == self.owner && !owner.is_dead() => owner,
            _ => {
                self.release_owner(self.owner);
                return Vec::new();
            }
        };

        let mut ctx = BuffContext {
            owner,
            enemies,
            rng,
            strikes: Vec::new(),
        };
        for power_up in &mut self.active {
            power_up.update(delta_time, &mut ctx);
        }

        self.active.retain(|p| {
            if !p.active {
                log::debug!("power-up {} expired", p.name);
            }
            p.active
        });
        ctx.strikes
    }

    pub fn get(&self, id: &str) -> Option<&PowerUp> {
        self.active.iter().find(|p| p.id == id)
    }

    pub fn has(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn active(&self) -> &[PowerUp] {
        &self.active
    }

    pub fn clear_all(&mut self) {
        for power_up in &mut self.active {
            power_up.deactivate();
        }
        self.active.clear();
    }

    /// Drops every power-up attached to `owner`, which is about to disappear.
    pub fn release_owner(&mut self, owner: EntityId) {
        if owner != self.owner || self.active.is_empty() {
            return;
        }
        log::debug!("releasing {} power-up(s) of {:?}", self.active.len(), owner);
        self.clear_all();
    }

    pub fn status(&self) -> Vec<BuffStatus> {
        self.active.iter().map(BuffStatus::from).collect()
    }
}
