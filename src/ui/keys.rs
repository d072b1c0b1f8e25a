//! Keyboard to [`InputSource`] adapter.
//!
//! Terminals report presses and repeats but rarely releases, so a movement key
//! holds its direction for a short window that key repeat keeps refreshing.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use delve::input::{InputSource, InputState};
use glam::DVec2;

/// Seconds a movement key stays held after its last press or repeat.
const HOLD_SECONDS: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Quit,
    Restart,
}

#[derive(Debug, Default)]
pub struct KeyboardInput {
    state: InputState,
    horizontal: (f64, f64),
    vertical: (f64, f64),
}

impl KeyboardInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, key: KeyEvent) -> KeyAction {
        if key.kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        match key.code {
            KeyCode::Char('w') | KeyCode::Up => self.vertical = (-1.0, HOLD_SECONDS),
            KeyCode::Char('s') | KeyCode::Down => self.vertical = (1.0, HOLD_SECONDS),
            KeyCode::Char('a') | KeyCode::Left => self.horizontal = (-1.0, HOLD_SECONDS),
            KeyCode::Char('d') | KeyCode::Right => self.horizontal = (1.0, HOLD_SECONDS),
            KeyCode::Char('e') | KeyCode::Char(' ') => self.state.press_action(),
            KeyCode::Char('h') => self.state.press_potion(),
            KeyCode::Char('r') => return KeyAction::Restart,
            KeyCode::Char('q') | KeyCode::Esc => return KeyAction::Quit,
            _ => {}
        }
        self.refresh_direction();
        KeyAction::None
    }

    /// Ages held keys by `delta_time`, releasing any whose window ran out.
    pub fn update(&mut self, delta_time: f64) {
        for axis in [&mut self.horizontal, &mut self.vertical] {
            axis.1 -= delta_time;
            if axis.1 <= 0.0 {
                *axis = (0.0, 0.0);
            }
        }
        self.refresh_direction();
    }

    fn refresh_direction(&mut self) {
        self.state.set_direction(self.horizontal.0, self.vertical.0);
    }
}

impl InputSource for KeyboardInput {
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
