//! Procedural dungeon: seeded stream, tile grid, and generator.

pub mod generation;
pub mod random;
pub mod types;

pub use generation::{generate_dungeon, Dungeon, DungeonGenerator};
pub use random::SeededRandom;
pub use types::{Room, Tile, TileGrid};
