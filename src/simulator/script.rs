//! Canned player input for headless runs.

use super::config::ScriptKind;
use crate::input::{InputSource, InputState};
use glam::DVec2;

const PATROL_LEG_SECONDS: f64 = 2.0;
const ACTION_INTERVAL_SECONDS: f64 = 1.0;
/// Radians per second for the circle script
const CIRCLE_TURN_RATE: f64 = 0.8;

/// An [`InputSource`] whose direction and button presses follow a fixed script.
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    kind: ScriptKind,
    elapsed: f64,
    since_action: f64,
    state: InputState,
}

impl ScriptedInput {
    pub fn new(kind: ScriptKind) -> Self {
        Self {
            kind,
            elapsed: 0.0,
            since_action: 0.0,
            state: InputState::new(),
        }
    }

    /// Moves the script forward; call once before each tick.
    pub fn advance(&mut self, delta_time: f64) {
        self.elapsed += delta_time;
        self.since_action += delta_time;

        match self.kind {
            ScriptKind::Idle => self.state.set_direction(0.0, 0.0),
            ScriptKind::Patrol => {
                let leg = (self.elapsed / PATROL_LEG_SECONDS) as u64 % 4;
                let (x, y) = match leg {
                    0 => (1.0, 0.0),
                    1 => (0.0, 1.0),
                    2 => (-1.0, 0.0),
                    _ => (0.0, -1.0),
                };
                self.state.set_direction(x, y);
            }
            ScriptKind::Circle => {
                let angle = self.elapsed * CIRCLE_TURN_RATE;
                self.state.set_direction(angle.cos(), angle.sin());
            }
        }

        if self.kind != ScriptKind::Idle && self.since_action >= ACTION_INTERVAL_SECONDS {
            self.since_action = 0.0;
            self.state.press_action();
        }
    }

    pub fn press_potion(&mut self) {
        self.state.press_potion();
    }
}

impl InputSource for ScriptedInput {
    fn movement(&self) -> DVec2 {
        self.state.movement()
    }

    fn take_action(&mut self) -> bool {
        self.state.take_action()
    }

    fn take_potion(&mut self) -> bool {
        self.state.take_potion()
    }
}
