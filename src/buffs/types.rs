use crate::combat::{Combatant, DamageInfo, EntityId};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// How long a power-up lasts once activated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BuffDuration {
    /// Expires after this many seconds of simulation time
    Timed(f64),
    Unbounded,
}

impl BuffDuration {
    pub fn seconds(&self) -> Option<f64> {
        match self {
            BuffDuration::Timed(secs) => Some(*secs),
            BuffDuration::Unbounded => None,
        }
    }
}

/// One enemy hit by a power-up pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuraStrike {
    pub target: EntityId,
    pub damage: DamageInfo,
    pub dealt: u32,
    pub killed: bool,
}

/// What a power-up may read and mutate while it ticks.
pub struct BuffContext<'a> {
    pub owner: &'a Combatant,
    pub enemies: &'a mut [Combatant],
    pub rng: &'a mut dyn RngCore,
    pub strikes: Vec<AuraStrike>,
}

/// Behaviour hooks for a concrete power-up.
pub trait PowerUpEffect: std::fmt::Debug {
    fn on_activate(&mut self) {}

    fn on_tick(&mut self, delta_time: f64, ctx: &mut BuffContext<'_>);

    fn on_deactivate(&mut self) {}
}

/// A power-up instance: lifecycle state around a boxed effect.
#[derive(Debug)]
pub struct PowerUp {
    pub id: String,
    pub name: String,
    pub duration: BuffDuration,
    pub active: bool,
    pub time_remaining: f64,
    /// Non-owning link to the combatant this power-up is attached to
    pub owner: Option<EntityId>,
    effect: Box<dyn PowerUpEffect>,
}

impl PowerUp {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        duration: BuffDuration,
        effect: Box<dyn PowerUpEffect>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            duration,
            active: false,
            time_remaining: duration.seconds().unwrap_or(0.0),
            owner: None,
            effect,
        }
    }

    pub fn activate(&mut self, owner: EntityId) {
        self.active = true;
        self.owner = Some(owner);
        self.renew();
        self.effect.on_activate();
    }

    /// Resets the remaining time to the full duration.
    pub fn renew(&mut self) {
        self.time_remaining = self.duration.seconds().unwrap_or(0.0);
    }

    pub fn deactivate(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.effect.on_deactivate();
        self.owner = None;
    }

    /// Counts down a timed power-up, then runs its effect if it is still active.
    pub fn update(&mut self, delta_time: f64, ctx: &mut BuffContext<'_>) {
        if !self.active {
            return;
        }

        if let BuffDuration::Timed(_) = self.duration {
            self.time_remaining -= delta_time;
            if self.time_remaining <= 0.0 {
                self.time_remaining = 0.0;
                self.deactivate();
                return;
            }
        }

        self.effect.on_tick(delta_time, ctx);
    }

    /// 1.0 for unbounded power-ups.
    pub fn fraction_remaining(&self) -> f64 {
        match self.duration {
            BuffDuration::Timed(total) if total > 0.0 => {
                (self.time_remaining / total).clamp(0.0, 1.0)
            }
            BuffDuration::Timed(_) => 0.0,
            BuffDuration::Unbounded => 1.0,
        }
    }

    pub fn label(&self) -> String {
        match self.duration {
            BuffDuration::Unbounded => "∞".to_string(),
            BuffDuration::Timed(_) => format!("{}s", self.time_remaining.ceil() as u64),
        }
    }
}

/// Display row for the buff panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuffStatus {
    pub id: String,
    pub name: String,
    pub fraction_remaining: f64,
    pub label: String,
}

impl From<&PowerUp> for BuffStatus {
    fn from(power_up: &PowerUp) -> Self {
        Self {
            id: power_up.id.clone(),
            name: power_up.name.clone(),
            fraction_remaining: power_up.fraction_remaining(),
            label: power_up.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[derive(Debug, Default)]
    struct Counter {
        ticks: u32,
    }

    impl PowerUpEffect for Counter {
        fn on_tick(&mut self, _delta_time: f64, _ctx: &mut BuffContext<'_>) {
            self.ticks += 1;
        }
    }

    fn tick(power_up: &mut PowerUp, delta_time: f64) {
        let owner = Combatant::new_player(EntityId(0), DVec2::ZERO);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut ctx = BuffContext {
            owner: &owner,
            enemies: &mut [],
            rng: &mut rng,
            strikes: Vec::new(),
        };
        power_up.update(delta_time, &mut ctx);
    }

    #[test]
    fn test_timed_power_up_expires() {
        let mut p = PowerUp::new("t", "Timed", BuffDuration::Timed(1.0), Box::new(Counter::default()));
        p.activate(EntityId(0));
        tick(&mut p, 0.6);
        assert!(p.active);
        assert!((p.fraction_remaining() - 0.4).abs() < 1e-9);
        assert_eq!(p.label(), "1s");
        tick(&mut p, 0.5);
        assert!(!p.active);
        assert_eq!(p.owner, None);
    }

    #[test]
    fn test_unbounded_power_up_never_expires() {
        let mut p = PowerUp::new("u", "Forever", BuffDuration::Unbounded, Box::new(Counter::default()));
        p.activate(EntityId(0));
        for _ in 0..1000 {
            tick(&mut p, 1.0);
        }
        assert!(p.active);
        assert_eq!(p.fraction_remaining(), 1.0);
        assert_eq!(p.label(), "∞");
    }

    #[test]
    fn test_inactive_power_up_does_not_tick() {
        let mut p = PowerUp::new("t", "Timed", BuffDuration::Timed(5.0), Box::new(Counter::default()));
        tick(&mut p, 1.0);
        assert_eq!(p.time_remaining, 5.0);
    }
}
