//! Session state, the per-tick orchestrator, and the views it publishes.

pub mod animation;
pub mod camera;
pub mod constants;
pub mod game_state;
pub mod messages;
pub mod snapshot;
pub mod tick;

pub use camera::Camera;
pub use game_state::{GameState, SessionStats};
pub use messages::{Message, MessageLog, Severity};
pub use snapshot::{EntityKind, HudSnapshot, RenderSnapshot};
pub use tick::{game_tick, TickEvent, TickResult};
