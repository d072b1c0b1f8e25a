//! Read-only views of the session handed to renderers and the HUD.

use crate::combat::{Combatant, EntityId, Item, Role};
use crate::effects::{EffectKind, EffectOverlay};
use glam::DVec2;
use serde::{Deserialize, Serialize};

pub use crate::buffs::BuffStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Enemy,
}

/// Everything a sprite renderer needs for one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub id: EntityId,
    pub kind: EntityKind,
    pub position: DVec2,
    /// 45° bucket, 0=E clockwise to 7=NE
    pub facing: u8,
    pub frame: u32,
    pub health_fraction: f64,
    pub effects: Vec<EffectKind>,
}

impl RenderSnapshot {
    pub fn capture(combatant: &Combatant, overlay: &EffectOverlay) -> Self {
        let kind = match combatant.role {
            Role::Player(_) => EntityKind::Player,
            Role::Enemy(_) => EntityKind::Enemy,
        };
        let stats = &combatant.stats;
        let health_fraction = if stats.max_health == 0 {
            0.0
        } else {
            stats.current_health as f64 / stats.max_health as f64
        };

        Self {
            id: combatant.id,
            kind,
            position: combatant.position,
            facing: combatant.animation.facing,
            frame: combatant.animation.frame,
            health_fraction,
            effects: overlay
                .effects_for(combatant.id)
                .iter()
                .map(|e| e.kind)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudSnapshot {
    pub health: u32,
    pub max_health: u32,
    pub experience: u64,
    pub experience_to_next_level: u64,
    pub level: u32,
    pub gold: u32,
    pub potions: usize,
}

impl HudSnapshot {
    pub fn capture(player: &Combatant) -> Self {
        let (gold, potions) = player
            .as_player()
            .map(|data| (data.gold, data.count_items(Item::HealthPotion)))
            .unwrap_or((0, 0));

        Self {
            health: player.stats.current_health,
            max_health: player.stats.max_health,
            experience: player.progression.experience,
            experience_to_next_level: player.progression.experience_to_next_level,
            level: player.level(),
            gold,
            potions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{ENEMY_INITIAL_FACING, PLAYER_INITIAL_FACING};

    #[test]
    fn test_hud_snapshot() {
        let mut player = Combatant::new_player(EntityId(0), DVec2::ZERO);
        if let Some(data) = player.as_player_mut() {
            data.add_to_inventory(Item::HealthPotion);
        }
        let hud = HudSnapshot::capture(&player);
        assert_eq!(hud.health, 100);
        assert_eq!(hud.experience_to_next_level, 100);
        assert_eq!(hud.gold, 100);
        assert_eq!(hud.potions, 1);
    }

    #[test]
    fn test_render_snapshot_carries_overlay() {
        let enemy = Combatant::new_enemy(EntityId(4), DVec2::new(10.0, 20.0), 1);
        let player = Combatant::new_player(EntityId(0), DVec2::ZERO);
        let mut overlay = EffectOverlay::new();
        overlay.mark(EntityId(4), EffectKind::AuraHit);

        let snap = RenderSnapshot::capture(&enemy, &overlay);
        assert_eq!(snap.kind, EntityKind::Enemy);
        assert_eq!(snap.facing, ENEMY_INITIAL_FACING);
        assert_eq!(snap.effects, vec![EffectKind::AuraHit]);
        assert_eq!(snap.health_fraction, 1.0);

        let snap = RenderSnapshot::capture(&player, &overlay);
        assert_eq!(snap.facing, PLAYER_INITIAL_FACING);
        assert!(snap.effects.is_empty());
    }
}
