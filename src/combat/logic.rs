use super::types::*;
use crate::core::animation::Animation;
use crate::core::constants::*;
use crate::enemy::EnemyAi;
use glam::DVec2;
use rand::Rng;

/// Experience needed to advance from `level`: floor(100 * 1.5^(level - 1))
pub fn experience_for_level(level: u32) -> u64 {
    curve(XP_CURVE_BASE, XP_CURVE_GROWTH, level) as u64
}

/// floor(base * growth^(level - 1)), treating level 0 like level 1
fn curve(base: f64, growth: f64, level: u32) -> f64 {
    let exponent = level.saturating_sub(1) as i32;
    (base * growth.powi(exponent)).floor()
}

/// Stat block for an enemy spawned at `level`.
pub fn enemy_stats_for_level(level: u32) -> Stats {
    let max_health = curve(ENEMY_HEALTH_BASE, ENEMY_HEALTH_GROWTH, level) as u32;
    Stats {
        max_health,
        current_health: max_health,
        damage: curve(ENEMY_DAMAGE_BASE, ENEMY_DAMAGE_GROWTH, level) as u32,
        critical_chance: (ENEMY_CRIT_BASE + level as f64 * ENEMY_CRIT_PER_LEVEL)
            .min(MAX_CRIT_CHANCE),
        critical_multiplier: ENEMY_CRIT_MULTIPLIER,
        defense: curve(ENEMY_DEFENSE_BASE, ENEMY_DEFENSE_GROWTH, level) as u32,
        speed: ENEMY_SPEED,
        attack_cooldown: ENEMY_ATTACK_COOLDOWN,
    }
}

pub fn enemy_reward_for_level(level: u32) -> Reward {
    Reward {
        experience: curve(ENEMY_XP_REWARD_BASE, ENEMY_XP_REWARD_GROWTH, level) as u64,
        gold: curve(ENEMY_GOLD_REWARD_BASE, ENEMY_GOLD_REWARD_GROWTH, level) as u32,
    }
}

pub fn player_base_stats() -> Stats {
    Stats {
        max_health: PLAYER_MAX_HEALTH,
        current_health: PLAYER_MAX_HEALTH,
        damage: PLAYER_DAMAGE,
        critical_chance: PLAYER_CRIT_CHANCE,
        critical_multiplier: PLAYER_CRIT_MULTIPLIER,
        defense: PLAYER_DEFENSE,
        speed: PLAYER_SPEED,
        attack_cooldown: PLAYER_ATTACK_COOLDOWN,
    }
}

/// Independent crit roll against `chance` in [0, 1].
pub fn roll_crit(chance: f64, rng: &mut (impl Rng + ?Sized)) -> bool {
    rng.gen::<f64>() < chance
}

/// Scales a base hit by the crit multiplier, flooring the result.
pub fn critical_damage(base: u32, multiplier: f64) -> u32 {
    (base as f64 * multiplier).floor() as u32
}

impl Combatant {
    fn with_stats(id: EntityId, position: DVec2, stats: Stats, level: u32, role: Role) -> Self {
        let animation = match role {
            Role::Player(_) => Animation::new(
                PLAYER_INITIAL_FACING,
                PLAYER_FRAME_COUNT,
                PLAYER_FRAME_DURATION,
            ),
            Role::Enemy(_) => {
                Animation::new(ENEMY_INITIAL_FACING, ENEMY_FRAME_COUNT, ENEMY_FRAME_DURATION)
            }
        };
        // A fresh combatant is off cooldown
        let attack_timer = stats.attack_cooldown;

        Self {
            id,
            position,
            previous_position: position,
            velocity: DVec2::ZERO,
            stats,
            progression: Progression {
                level,
                experience: 0,
                experience_to_next_level: experience_for_level(level),
            },
            attack_timer,
            animation,
            role,
        }
    }

    pub fn new_player(id: EntityId, position: DVec2) -> Self {
        let role = Role::Player(PlayerData {
            gold: PLAYER_STARTING_GOLD,
            inventory: Vec::new(),
        });
        Self::with_stats(id, position, player_base_stats(), 1, role)
    }

    /// Enemy whose stats and reward derive purely from its spawn level.
    pub fn new_enemy(id: EntityId, position: DVec2, level: u32) -> Self {
        let level = level.max(1);
        let role = Role::Enemy(EnemyData {
            ai: EnemyAi::new(),
            reward: enemy_reward_for_level(level),
        });
        Self::with_stats(id, position, enemy_stats_for_level(level), level, role)
    }

    pub fn level(&self) -> u32 {
        self.progression.level
    }

    pub fn is_dead(&self) -> bool {
        self.stats.current_health == 0
    }

    pub fn is_player(&self) -> bool {
        matches!(self.role, Role::Player(_))
    }

    pub fn as_player(&self) -> Option<&PlayerData> {
        match &self.role {
            Role::Player(data) => Some(data),
            Role::Enemy(_) => None,
        }
    }

    pub fn as_player_mut(&mut self) -> Option<&mut PlayerData> {
        match &mut self.role {
            Role::Player(data) => Some(data),
            Role::Enemy(_) => None,
        }
    }

    pub fn as_enemy(&self) -> Option<&EnemyData> {
        match &self.role {
            Role::Enemy(data) => Some(data),
            Role::Player(_) => None,
        }
    }

    pub fn as_enemy_mut(&mut self) -> Option<&mut EnemyData> {
        match &mut self.role {
            Role::Enemy(data) => Some(data),
            Role::Player(_) => None,
        }
    }

    /// Reward for killing this combatant (enemies only).
    pub fn reward(&self) -> Option<Reward> {
        self.as_enemy().map(|data| data.reward)
    }

    /// Applies defense with a floor of 1, clamps health at 0, and returns the damage dealt.
    pub fn take_damage(&mut self, info: DamageInfo) -> u32 {
        let actual = info.value.saturating_sub(self.stats.defense).max(1);
        self.stats.current_health = self.stats.current_health.saturating_sub(actual);
        actual
    }

    /// Restores up to `amount` without exceeding max health; returns what was restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let missing = self.stats.max_health - self.stats.current_health;
        let healed = amount.min(missing);
        self.stats.current_health += healed;
        healed
    }

    /// Rolls a crit, hits `target` through `take_damage`, and restarts the cooldown.
    pub fn attack(&mut self, target: &mut Combatant, rng: &mut impl Rng) -> AttackResult {
        let is_critical = roll_crit(self.stats.critical_chance, rng);
        let value = if is_critical {
            critical_damage(self.stats.damage, self.stats.critical_multiplier)
        } else {
            self.stats.damage
        };
        let damage = DamageInfo { value, is_critical };
        let dealt = target.take_damage(damage);
        self.attack_timer = 0.0;
        AttackResult { damage, dealt }
    }

    pub fn can_attack(&self) -> bool {
        self.attack_timer >= self.stats.attack_cooldown
    }

    /// Accumulates simulation time toward the next attack.
    pub fn tick_cooldown(&mut self, delta_time: f64) {
        self.attack_timer += delta_time;
    }

    /// Adds experience and returns every level reached, in order.
    pub fn gain_experience(&mut self, amount: u64) -> Vec<u32> {
        self.progression.experience += amount;

        let mut levels_gained = Vec::new();
        while self.progression.experience >= self.progression.experience_to_next_level {
            self.progression.experience -= self.progression.experience_to_next_level;
            self.level_up();
            levels_gained.push(self.progression.level);
        }
        levels_gained
    }

    pub fn level_up(&mut self) {
        let stats = &mut self.stats;
        self.progression.level += 1;

        stats.max_health += stats.max_health * LEVEL_UP_HEALTH_PERCENT / 100;
        stats.current_health = stats.max_health;
        stats.damage += stats.damage * LEVEL_UP_DAMAGE_PERCENT / 100;
        stats.defense += LEVEL_UP_DEFENSE;
        stats.critical_chance = (stats.critical_chance + LEVEL_UP_CRIT_CHANCE).min(MAX_CRIT_CHANCE);

        self.progression.experience_to_next_level = experience_for_level(self.progression.level);

        if let Role::Player(data) = &mut self.role {
            data.add_gold(PLAYER_LEVEL_UP_GOLD);
        }
    }

    /// Sets velocity from a direction; non-zero input is normalised and scaled to full speed.
    pub fn set_velocity(&mut self, vx: f64, vy: f64) {
        let direction = DVec2::new(vx, vy);
        self.velocity = direction.normalize_or_zero() * self.stats.speed;
    }

    /// Remembers the current position, then moves by `velocity * delta_time`.
    pub fn integrate(&mut self, delta_time: f64) {
        self.previous_position = self.position;
        self.position += self.velocity * delta_time;
    }

    /// Undoes the last `integrate`.
    pub fn rollback(&mut self) {
        self.position = self.previous_position;
    }

    pub fn distance_to(&self, point: DVec2) -> f64 {
        self.position.distance(point)
    }

    /// Heals with the first potion in the inventory. Returns 0 when there is none.
    pub fn use_health_potion(&mut self) -> u32 {
        let has_potion = self
            .as_player()
            .map(|data| data.inventory.contains(&Item::HealthPotion))
            .unwrap_or(false);
        if !has_potion {
            return 0;
        }

        let healed = self.heal(HEALTH_POTION_HEAL);
        if let Some(data) = self.as_player_mut() {
            if let Some(index) = data
                .inventory
                .iter()
                .position(|&item| item == Item::HealthPotion)
            {
                data.inventory.remove(index);
            }
        }
        healed
    }
}
