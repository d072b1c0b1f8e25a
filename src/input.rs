//! Simulation input: a movement direction plus edge-triggered buttons.

use glam::DVec2;

/// Anything that can steer the player for one tick.
pub trait InputSource {
    /// Movement direction with each component in [-1, 1]; zero when idle.
    fn movement(&self) -> DVec2;

    /// True once per press of the action button.
    fn take_action(&mut self) -> bool;

    /// True once per press of the potion button.
    fn take_potion(&mut self) -> bool;
}

/// Plain input state fed by a keyboard handler or a test.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    direction: DVec2,
    action_pressed: bool,
    potion_pressed: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the held direction. Diagonals are normalised so they are not faster.
    pub fn set_direction(&mut self, x: f64, y: f64) {
        let raw = DVec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0));
        self.direction = raw.normalize_or_zero();
    }

    pub fn press_action(&mut self) {
        self.action_pressed = true;
    }

    pub fn press_potion(&mut self) {
        self.potion_pressed = true;
    }
}

impl InputSource for InputState {
    fn movement(&self) -> DVec2 {
        self.direction
    }

    fn take_action(&mut self) -> bool {
        std::mem::take(&mut self.action_pressed)
    }

    fn take_potion(&mut self) -> bool {
        std::mem::take(&mut self.potion_pressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_is_edge_triggered() {
        let mut input = InputState::new();
        assert!(!input.take_action());
        input.press_action();
        assert!(input.take_action());
        assert!(!input.take_action());
    }

    #[test]
    fn test_diagonal_normalised() {
        let mut input = InputState::new();
        input.set_direction(1.0, -1.0);
        assert!((input.movement().length() - 1.0).abs() < 1e-9);
        input.set_direction(0.0, 0.0);
        assert_eq!(input.movement(), DVec2::ZERO);
    }
}
