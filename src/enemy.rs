//! Enemy behaviour: a two-state aggro/wander machine driving an enemy's velocity.
//!
//! Aggro is terminal. With the default unbounded aggro range every enemy
//! commits to the chase on its first update.

use crate::combat::Combatant;
use crate::core::constants::*;
use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggroState {
    Wandering,
    Aggro,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnemyAi {
    pub state: AggroState,
    pub aggro_range: f64,
    pub attack_range: f64,
    pub wander_timer: f64,
    pub wander_duration: f64,
    /// Unit direction for the current wander leg, zero while standing still
    pub wander_direction: DVec2,
}

impl Default for EnemyAi {
    fn default() -> Self {
        Self::new()
    }
}

impl EnemyAi {
    pub fn new() -> Self {
        Self {
            state: AggroState::Wandering,
            aggro_range: ENEMY_AGGRO_RANGE,
            attack_range: ENEMY_ATTACK_RANGE,
            wander_timer: 0.0,
            wander_duration: ENEMY_WANDER_DURATION,
            wander_direction: DVec2::ZERO,
        }
    }

    pub fn with_aggro_range(mut self, aggro_range: f64) -> Self {
        self.aggro_range = aggro_range;
        self
    }

    pub fn is_aggro(&self) -> bool {
        self.state == AggroState::Aggro
    }

    /// Chooses this tick's velocity (in units of the enemy's speed) toward `target`.
    fn steer(&mut self, position: DVec2, target: DVec2, delta_time: f64, rng: &mut impl Rng) -> DVec2 {
        let distance = position.distance(target);

        if self.state == AggroState::Wandering && distance <= self.aggro_range {
            self.state = AggroState::Aggro;
        }

        match self.state {
            AggroState::Aggro => {
                if distance > self.attack_range {
                    (target - position).normalize_or_zero()
                } else {
                    DVec2::ZERO
                }
            }
            AggroState::Wandering => {
                self.wander_timer += delta_time;
                if self.wander_timer >= self.wander_duration {
                    self.wander_timer = 0.0;
                    self.wander_direction = if rng.gen::<f64>() < ENEMY_WANDER_STOP_CHANCE {
                        DVec2::ZERO
                    } else {
                        let angle = rng.gen::<f64>() * TAU;
                        DVec2::new(angle.cos(), angle.sin())
                    };
                }
                self.wander_direction * ENEMY_WANDER_SPEED_FACTOR
            }
        }
    }
}

/// Runs one AI update for `enemy`, setting its velocity. Does nothing for non-enemies.
pub fn think(
    enemy: &mut Combatant,
    target: DVec2,
    delta_time: f64,
    rng: &mut impl Rng,
) -> Option<AggroState> {
    let position = enemy.position;
    let speed = enemy.stats.speed;
    let data = enemy.as_enemy_mut()?;

    let heading = data.ai.steer(position, target, delta_time, rng);
    let state = data.ai.state;
    enemy.velocity = heading * speed;
    Some(state)
}

/// Whether `enemy` is close enough to `target` to land a melee hit.
pub fn in_melee_contact(enemy: &Combatant, target: &Combatant) -> bool {
    enemy.position.distance(target.position) < MELEE_CONTACT_DISTANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::EntityId;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn enemy_at(x: f64, y: f64) -> Combatant {
        Combatant::new_enemy(EntityId(1), DVec2::new(x, y), 1)
    }

    #[test]
    fn test_unbounded_aggro_on_first_update() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut enemy = enemy_at(0.0, 0.0);
        let state = think(&mut enemy, DVec2::new(5000.0, 0.0), 0.016, &mut rng);
        assert_eq!(state, Some(AggroState::Aggro));
        assert_eq!(enemy.velocity, DVec2::new(ENEMY_SPEED, 0.0));
    }

    #[test]
    fn test_stops_inside_attack_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut enemy = enemy_at(0.0, 0.0);
        think(&mut enemy, DVec2::new(20.0, 0.0), 0.016, &mut rng);
        assert_eq!(enemy.velocity, DVec2::ZERO);
    }

    #[test]
    fn test_aggro_never_reverts() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut enemy = enemy_at(0.0, 0.0);
        if let Some(data) = enemy.as_enemy_mut() {
            data.ai = EnemyAi::new().with_aggro_range(100.0);
        }
        think(&mut enemy, DVec2::new(50.0, 0.0), 0.016, &mut rng);
        let state = think(&mut enemy, DVec2::new(10_000.0, 0.0), 0.016, &mut rng);
        assert_eq!(state, Some(AggroState::Aggro));
    }

    #[test]
    fn test_wander_moves_at_half_speed_or_stops() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..20 {
            let mut enemy = enemy_at(0.0, 0.0);
            if let Some(data) = enemy.as_enemy_mut() {
                data.ai = EnemyAi::new().with_aggro_range(10.0);
            }
            let state = think(&mut enemy, DVec2::new(500.0, 0.0), 2.0, &mut rng);
            assert_eq!(state, Some(AggroState::Wandering));
            let speed = enemy.velocity.length();
            assert!(speed == 0.0 || (speed - ENEMY_SPEED * 0.5).abs() < 1e-9);
        }
    }

    #[test]
    fn test_wander_holds_direction_within_interval() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut enemy = enemy_at(0.0, 0.0);
        if let Some(data) = enemy.as_enemy_mut() {
            data.ai = EnemyAi::new().with_aggro_range(10.0);
        }
        // Before the first interval elapses the enemy stands still
        think(&mut enemy, DVec2::new(500.0, 0.0), 1.0, &mut rng);
        assert_eq!(enemy.velocity, DVec2::ZERO);

        think(&mut enemy, DVec2::new(500.0, 0.0), 1.0, &mut rng);
        let chosen = enemy.velocity;
        think(&mut enemy, DVec2::new(500.0, 0.0), 0.5, &mut rng);
        assert_eq!(enemy.velocity, chosen);
    }

    #[test]
    fn test_think_ignores_player() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut player = Combatant::new_player(EntityId(0), DVec2::ZERO);
        assert_eq!(think(&mut player, DVec2::new(100.0, 0.0), 0.1, &mut rng), None);
    }

    #[test]
    fn test_melee_contact_is_strict() {
        let player = Combatant::new_player(EntityId(0), DVec2::ZERO);
        assert!(in_melee_contact(&enemy_at(27.9, 0.0), &player));
        assert!(!in_melee_contact(&enemy_at(28.0, 0.0), &player));
    }
}
