//! Transient player-facing message feed.

use crate::core::constants::{MAX_MESSAGES, MESSAGE_LIFETIME_SECONDS};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Damage,
    Critical,
    LevelUp,
    Heal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub severity: Severity,
    /// Seconds of simulation time left on screen
    pub remaining: f64,
}

/// Newest-last feed capped at [`MAX_MESSAGES`]; older entries fall off the front.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: VecDeque<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: impl Into<String>, severity: Severity) {
        if self.messages.len() >= MAX_MESSAGES {
            self.messages.pop_front();
        }
        self.messages.push_back(Message {
            text: text.into(),
            severity,
            remaining: MESSAGE_LIFETIME_SECONDS,
        });
    }

    pub fn update(&mut self, delta_time: f64) {
        for message in self.messages.iter_mut() {
            message.remaining -= delta_time;
        }
        self.messages.retain(|m| m.remaining > 0.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn to_vec(&self) -> Vec<Message> {
        self.messages.iter().cloned().collect()
    }
}
