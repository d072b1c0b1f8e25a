//! Short-lived visual markers keyed by entity, kept apart from the entities themselves.

use crate::combat::EntityId;
use crate::core::constants::{AURA_HIT_FLASH_SECONDS, CRIT_FLASH_SECONDS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    AuraHit,
    CriticalFlash,
}

impl EffectKind {
    pub fn lifetime(self) -> f64 {
        match self {
            EffectKind::AuraHit => AURA_HIT_FLASH_SECONDS,
            EffectKind::CriticalFlash => CRIT_FLASH_SECONDS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualEffect {
    pub kind: EffectKind,
    pub remaining: f64,
}

#[derive(Debug, Clone, Default)]
pub struct EffectOverlay {
    effects: BTreeMap<EntityId, Vec<VisualEffect>>,
}

impl EffectOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) `kind` on `entity`.
    pub fn mark(&mut self, entity: EntityId, kind: EffectKind) {
        let effects = self.effects.entry(entity).or_default();
        let remaining = kind.lifetime();
        match effects.iter_mut().find(|e| e.kind == kind) {
            Some(existing) => existing.remaining = remaining,
            None => effects.push(VisualEffect { kind, remaining }),
        }
    }

    pub fn update(&mut self, delta_time: f64) {
        for effects in self.effects.values_mut() {
            for effect in effects.iter_mut() {
                effect.remaining -= delta_time;
            }
            effects.retain(|e| e.remaining > 0.0);
        }
        self.effects.retain(|_, effects| !effects.is_empty());
    }

    pub fn has(&self, entity: EntityId, kind: EffectKind) -> bool {
        self.effects_for(entity).iter().any(|e| e.kind == kind)
    }

    pub fn effects_for(&self, entity: EntityId) -> &[VisualEffect] {
        self.effects.get(&entity).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Drops every marker for an entity that left the world.
    pub fn forget(&mut self, entity: EntityId) {
        self.effects.remove(&entity);
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effects_expire() {
        let mut overlay = EffectOverlay::new();
        overlay.mark(EntityId(3), EffectKind::AuraHit);
        overlay.mark(EntityId(3), EffectKind::CriticalFlash);
        overlay.update(0.26);
        assert!(!overlay.has(EntityId(3), EffectKind::AuraHit));
        assert!(overlay.has(EntityId(3), EffectKind::CriticalFlash));
        overlay.update(0.1);
        assert!(overlay.is_empty());
    }

    #[test]
    fn test_mark_restarts_without_duplicating() {
        let mut overlay = EffectOverlay::new();
        overlay.mark(EntityId(1), EffectKind::AuraHit);
        overlay.update(0.2);
        overlay.mark(EntityId(1), EffectKind::AuraHit);
        assert_eq!(overlay.effects_for(EntityId(1)).len(), 1);
        overlay.update(0.2);
        assert!(overlay.has(EntityId(1), EffectKind::AuraHit));
    }

    #[test]
    fn test_forget() {
        let mut overlay = EffectOverlay::new();
        overlay.mark(EntityId(1), EffectKind::AuraHit);
        overlay.forget(EntityId(1));
        assert!(overlay.effects_for(EntityId(1)).is_empty());
    }
}
