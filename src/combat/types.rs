use crate::core::animation::Animation;
use crate::enemy::EnemyAi;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Stable identity for anything the orchestrator owns (player, enemies).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// The only thing an attacker hands to `take_damage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageInfo {
    pub value: u32,
    pub is_critical: bool,
}

impl DamageInfo {
    pub fn normal(value: u32) -> Self {
        Self {
            value,
            is_critical: false,
        }
    }

    pub fn critical(value: u32) -> Self {
        Self {
            value,
            is_critical: true,
        }
    }
}

/// Outcome of a single `attack` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackResult {
    /// What the attacker rolled (before the target's defense).
    pub damage: DamageInfo,
    /// Health actually removed from the target.
    pub dealt: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub max_health: u32,
    pub current_health: u32,
    pub damage: u32,
    /// Clamped to [0, 0.5]
    pub critical_chance: f64,
    pub critical_multiplier: f64,
    pub defense: u32,
    /// World units per second
    pub speed: f64,
    /// Seconds between attacks
    pub attack_cooldown: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    pub level: u32,
    pub experience: u64,
    pub experience_to_next_level: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Item {
    HealthPotion,
}

impl Item {
    pub fn name(&self) -> &'static str {
        match self {
            Item::HealthPotion => "Health Potion",
        }
    }
}

/// Experience and gold granted when an enemy dies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub experience: u64,
    pub gold: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerData {
    pub gold: u32,
    pub inventory: Vec<Item>,
}

impl PlayerData {
    pub fn add_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// Spends gold only if the full amount is available.
    pub fn remove_gold(&mut self, amount: u32) -> bool {
        if self.gold >= amount {
            self.gold -= amount;
            true
        } else {
            false
        }
    }

    pub fn add_to_inventory(&mut self, item: Item) {
        self.inventory.push(item);
    }

    pub fn count_items(&self, item: Item) -> usize {
        self.inventory.iter().filter(|&&i| i == item).count()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnemyData {
    pub ai: EnemyAi,
    pub reward: Reward,
}

/// The fields that differ between the player and enemies.
#[derive(Debug, Clone, PartialEq)]
pub enum Role {
    Player(PlayerData),
    Enemy(EnemyData),
}

/// Shared stat/combat/progression record for the player and every enemy.
#[derive(Debug, Clone, PartialEq)]
pub struct Combatant {
    pub id: EntityId,
    pub position: DVec2,
    /// Position before the last `integrate`, used for collision rollback
    pub previous_position: DVec2,
    pub velocity: DVec2,
    pub stats: Stats,
    pub progression: Progression,
    /// Seconds of simulation time since the last attack
    pub attack_timer: f64,
    pub animation: Animation,
    pub role: Role,
}
