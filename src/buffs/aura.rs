//! The damage aura: an unbounded power-up that pulses damage around its owner.

use super::types::{AuraStrike, BuffContext, BuffDuration, PowerUp, PowerUpEffect};
use crate::combat::{critical_damage, roll_crit, DamageInfo};
use crate::core::constants::*;

/// Pulse radius for an owner of the given level.
pub fn aura_radius(level: u32) -> f64 {
    AURA_BASE_RADIUS + level.saturating_sub(1) as f64 * AURA_RADIUS_PER_LEVEL
}

/// Base pulse damage before the crit roll and the target's defense.
pub fn aura_damage(level: u32, owner_damage: u32) -> u32 {
    AURA_BASE_DAMAGE
        + level.saturating_sub(1) * AURA_DAMAGE_PER_LEVEL
        + (owner_damage as f64 * AURA_OWNER_DAMAGE_SHARE).floor() as u32
}

pub fn aura_crit_chance(owner_crit_chance: f64) -> f64 {
    owner_crit_chance + AURA_CRIT_BONUS
}

#[derive(Debug, Default)]
pub struct DamageAura {
    pulse_timer: f64,
}

impl DamageAura {
    pub fn new() -> Self {
        Self::default()
    }

    fn pulse(&self, ctx: &mut BuffContext<'_>) {
        let owner = ctx.owner;
        let level = owner.level();
        let radius = aura_radius(level);
        let base = aura_damage(level, owner.stats.damage);
        let crit_chance = aura_crit_chance(owner.stats.critical_chance);

        for enemy in ctx.enemies.iter_mut() {
            if enemy.is_dead() || enemy.distance_to(owner.position) > radius {
                continue;
            }

            let is_critical = roll_crit(crit_chance, &mut *ctx.rng);
            let value = if is_critical {
                critical_damage(base, owner.stats.critical_multiplier)
            } else {
                base
            };
            let damage = DamageInfo { value, is_critical };
            let dealt = enemy.take_damage(damage);

            ctx.strikes.push(AuraStrike {
                target: enemy.id,
                damage,
                dealt,
                killed: enemy.is_dead(),
            });
        }
    }
}

impl PowerUpEffect for DamageAura {
    fn on_activate(&mut self) {
        self.pulse_timer = 0.0;
    }

    fn on_tick(&mut self, delta_time: f64, ctx: &mut BuffContext<'_>) {
        self.pulse_timer += delta_time;
        if self.pulse_timer >= AURA_PULSE_INTERVAL {
            self.pulse_timer = 0.0;
            self.pulse(ctx);
        }
    }
}

/// Factory registered under [`DAMAGE_AURA_ID`].
pub fn damage_aura() -> PowerUp {
    PowerUp::new(
        DAMAGE_AURA_ID,
        DAMAGE_AURA_NAME,
        BuffDuration::Unbounded,
        Box::new(DamageAura::new()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{Combatant, EntityId};
    use glam::DVec2;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_scaling_formulas() {
        assert_eq!(aura_radius(1), 100.0);
        assert_eq!(aura_radius(4), 130.0);
        // 8 + 0 + floor(15 * 0.25)
        assert_eq!(aura_damage(1, 15), 11);
        // 8 + 4 + floor(17 * 0.25)
        assert_eq!(aura_damage(3, 17), 16);
        assert!((aura_crit_chance(0.15) - 0.2).abs() < 1e-9);
    }

    fn run_pulse(owner: &Combatant, enemies: &mut [Combatant], delta_time: f64) -> Vec<AuraStrike> {
        let mut aura = damage_aura();
        aura.activate(owner.id);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut ctx = BuffContext {
            owner,
            enemies,
            rng: &mut rng,
            strikes: Vec::new(),
        };
        aura.update(delta_time, &mut ctx);
        ctx.strikes
    }

    #[test]
    fn test_pulse_hits_only_enemies_in_radius() {
        let mut owner = Combatant::new_player(EntityId(0), DVec2::ZERO);
        owner.stats.critical_chance = 0.0;
        owner.stats.critical_multiplier = 1.0;
        let mut enemies = vec![
            Combatant::new_enemy(EntityId(1), DVec2::new(50.0, 0.0), 1),
            Combatant::new_enemy(EntityId(2), DVec2::new(300.0, 0.0), 1),
        ];

        let strikes = run_pulse(&owner, &mut enemies, 0.5);
        assert_eq!(strikes.len(), 1);
        assert_eq!(strikes[0].target, EntityId(1));
        // With a 1.0 multiplier a crit hits for the base amount
        assert_eq!(strikes[0].damage.value, 11);
        assert_eq!(strikes[0].dealt, 9);
        assert_eq!(enemies[0].stats.current_health, 71);
        assert_eq!(enemies[1].stats.current_health, 80);
    }

    #[test]
    fn test_no_pulse_before_interval() {
        let owner = Combatant::new_player(EntityId(0), DVec2::ZERO);
        let mut enemies = vec![Combatant::new_enemy(EntityId(1), DVec2::new(10.0, 0.0), 1)];
        assert!(run_pulse(&owner, &mut enemies, 0.3).is_empty());
        assert_eq!(enemies[0].stats.current_health, 80);
    }

    #[test]
    fn test_crit_pulse_uses_owner_multiplier() {
        let mut owner = Combatant::new_player(EntityId(0), DVec2::ZERO);
        owner.stats.critical_chance = 1.0;
        let mut enemies = vec![Combatant::new_enemy(EntityId(1), DVec2::new(10.0, 0.0), 1)];
        let strikes = run_pulse(&owner, &mut enemies, 0.5);
        assert!(strikes[0].damage.is_critical);
        // floor(11 * 2.5)
        assert_eq!(strikes[0].damage.value, 27);
    }
}
