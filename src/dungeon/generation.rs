//! Procedural dungeon generation.
//!
//! Rooms are scattered by rejection sampling, carved, chained together with
//! L-shaped corridors in generation order, and sprinkled with chests. Every
//! draw comes from a [`SeededRandom`], so the same seed and size always give
//! the same map.

use super::random::SeededRandom;
use super::types::{Room, Tile, TileGrid};
use crate::core::constants::{
    CHEST_ROOM_RATIO, FALLBACK_SPAWN, ROOM_ATTEMPTS, ROOM_MAX_SIZE, ROOM_MIN_SIZE, TILE_SIZE,
};
use glam::DVec2;

/// A generated dungeon: the tile grid, its rooms, and the seeded stream that
/// keeps feeding spawn positions after generation.
#[derive(Debug, Clone)]
pub struct Dungeon {
    pub grid: TileGrid,
    rooms: Vec<Room>,
    random: SeededRandom,
}

impl Dungeon {
    /// Accepted rooms in generation order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn seed(&self) -> u32 {
        self.random.seed()
    }

    /// Center of the first room in world units, or a fixed fallback.
    pub fn spawn_point(&self) -> DVec2 {
        match self.rooms.first() {
            Some(room) => {
                let (cx, cy) = room.center();
                DVec2::new(cx as f64 * TILE_SIZE, cy as f64 * TILE_SIZE)
            }
            None => DVec2::new(FALLBACK_SPAWN.0, FALLBACK_SPAWN.1),
        }
    }

    /// Samples a cell inside a random room, in world units.
    ///
    /// Draws from the generation stream, so spawn placement is reproducible
    /// from the seed. The cell is not re-checked against later edits.
    pub fn random_walkable_position(&mut self) -> DVec2 {
        if self.rooms.is_empty() {
            return DVec2::new(FALLBACK_SPAWN.0, FALLBACK_SPAWN.1);
        }
        let room = self.rooms[self.random.next_index(self.rooms.len())];
        let x = room.x + self.random.next_index(room.width);
        let y = room.y + self.random.next_index(room.height);
        DVec2::new(x as f64 * TILE_SIZE, y as f64 * TILE_SIZE)
    }
}

/// Builds dungeons from a seed and grid size.
#[derive(Debug, Clone)]
pub struct DungeonGenerator {
    random: SeededRandom,
    width: usize,
    height: usize,
}

impl DungeonGenerator {
    pub fn new(seed: u32, width: usize, height: usize) -> Self {
        Self {
            random: SeededRandom::new(seed),
            width,
            height,
        }
    }

    /// Runs the full pipeline and hands over the seeded stream to the result.
    pub fn generate(mut self) -> Dungeon {
        let mut grid = TileGrid::new(self.width, self.height);

        let rooms = self.place_rooms();
        for room in &rooms {
            carve_room(&mut grid, room);
        }
        self.connect_rooms(&mut grid, &rooms);
        let chests = self.place_chests(&mut grid, &rooms);

        log::info!(
            "generated {}x{} dungeon from seed {}: {} rooms, {} chests",
            self.width,
            self.height,
            self.random.seed(),
            rooms.len(),
            chests
        );

        Dungeon {
            grid,
            rooms,
            random: self.random,
        }
    }

    /// Rejection sampling: a candidate touching an accepted room is dropped, never retried.
    fn place_rooms(&mut self) -> Vec<Room> {
        let mut rooms: Vec<Room> = Vec::new();
        let size_span = (ROOM_MAX_SIZE - ROOM_MIN_SIZE) as f64;

        for _ in 0..ROOM_ATTEMPTS {
            let width = (self.random.next() * size_span).floor() as usize + ROOM_MIN_SIZE;
            let height = (self.random.next() * size_span).floor() as usize + ROOM_MIN_SIZE;
            let x_span = self.width as i64 - width as i64 - 2;
            let y_span = self.height as i64 - height as i64 - 2;
            let x_roll = self.random.next();
            let y_roll = self.random.next();

            // Grid too small for this candidate
            if x_span < 0 || y_span < 0 {
                continue;
            }

            let x = (x_roll * x_span as f64).floor() as usize + 1;
            let y = (y_roll * y_span as f64).floor() as usize + 1;
            let candidate = Room::new(x, y, width, height);

            if rooms.iter().any(|room| candidate.overlaps_with_margin(room)) {
                continue;
            }
            rooms.push(candidate);
        }

        rooms
    }

    /// Chains room[i] to room[i + 1] with an L-shaped corridor between centers.
    fn connect_rooms(&mut self, grid: &mut TileGrid, rooms: &[Room]) {
        for pair in rooms.windows(2) {
            let (x1, y1) = pair[0].center();
            let (x2, y2) = pair[1].center();

            if self.random.next() > 0.5 {
                carve_horizontal(grid, x1, x2, y1);
                carve_vertical(grid, y1, y2, x2);
            } else {
                carve_vertical(grid, y1, y2, x1);
                carve_horizontal(grid, x1, x2, y2);
            }
        }
    }

    /// Returns how many chests actually landed; collisions are skipped, not retried.
    fn place_chests(&mut self, grid: &mut TileGrid, rooms: &[Room]) -> usize {
        if rooms.is_empty() {
            return 0;
        }
        let target = (rooms.len() as f64 * CHEST_ROOM_RATIO).floor() as usize;
        let mut placed = 0;

        for _ in 0..target {
            let room = rooms[self.random.next_index(rooms.len())];
            let x = (room.x + self.random.next_index(room.width)) as i64;
            let y = (room.y + self.random.next_index(room.height)) as i64;

            if grid.tile(x, y) == Tile::Floor {
                grid.set_tile(x, y, Tile::Chest);
                placed += 1;
            }
        }

        placed
    }
}

/// Convenience wrapper: `DungeonGenerator::new(seed, width, height).generate()`
pub fn generate_dungeon(seed: u32, width: usize, height: usize) -> Dungeon {
    DungeonGenerator::new(seed, width, height).generate()
}

fn carve_room(grid: &mut TileGrid, room: &Room) {
    for y in room.y..room.y + room.height {
        for x in room.x..room.x + room.width {
            grid.set_tile(x as i64, y as i64, Tile::Floor);
        }
    }
}

fn carve_horizontal(grid: &mut TileGrid, x1: usize, x2: usize, y: usize) {
    for x in x1.min(x2)..=x1.max(x2) {
        grid.set_tile(x as i64, y as i64, Tile::Floor);
    }
}

fn carve_vertical(grid: &mut TileGrid, y1: usize, y2: usize, x: usize) {
    for y in y1.min(y2)..=y1.max(y2) {
        grid.set_tile(x as i64, y as i64, Tile::Floor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_dungeon() {
        let a = generate_dungeon(4242, 100, 100);
        let b = generate_dungeon(4242, 100, 100);
        assert_eq!(a.grid, b.grid);
        assert_eq!(a.rooms(), b.rooms());
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate_dungeon(1, 100, 100);
        let b = generate_dungeon(2, 100, 100);
        assert_ne!(a.grid.codes(), b.grid.codes());
    }

    #[test]
    fn test_rooms_are_within_bounds_and_sized() {
        let dungeon = generate_dungeon(777, 100, 100);
        assert!(!dungeon.rooms().is_empty());
        for room in dungeon.rooms() {
            assert!((ROOM_MIN_SIZE..ROOM_MAX_SIZE).contains(&room.width));
            assert!((ROOM_MIN_SIZE..ROOM_MAX_SIZE).contains(&room.height));
            assert!(room.x >= 1 && room.y >= 1);
            assert!(room.x + room.width < 100);
            assert!(room.y + room.height < 100);
        }
    }

    #[test]
    fn test_rooms_are_carved() {
        let dungeon = generate_dungeon(31337, 100, 100);
        for room in dungeon.rooms() {
            for y in room.y..room.y + room.height {
                for x in room.x..room.x + room.width {
                    assert!(dungeon.grid.is_walkable(x as i64, y as i64));
                }
            }
        }
    }

    #[test]
    fn test_chest_count_bounded_by_target() {
        for seed in 0..20 {
            let dungeon = generate_dungeon(seed, 100, 100);
            let target = (dungeon.rooms().len() as f64 * CHEST_ROOM_RATIO).floor() as usize;
            assert!(dungeon.grid.count(Tile::Chest) <= target);
        }
    }

    #[test]
    fn test_room_that_exactly_fits_is_accepted() {
        // An 8x8 grid only fits 6-wide rooms, with no slack for the offset
        let placed = (0..200)
            .map(|seed| generate_dungeon(seed, 8, 8))
            .filter(|dungeon| !dungeon.rooms().is_empty())
            .inspect(|dungeon| {
                for room in dungeon.rooms() {
                    assert_eq!((room.x, room.y, room.width, room.height), (1, 1, 6, 6));
                }
                assert_eq!(dungeon.grid.count(Tile::Wall), 64 - 36);
            })
            .count();
        assert!(placed > 0);
    }

    #[test]
    fn test_degenerate_size_falls_back() {
        let dungeon = generate_dungeon(5, 4, 4);
        assert!(dungeon.rooms().is_empty());
        assert_eq!(dungeon.grid.count(Tile::Floor), 0);
        assert_eq!(dungeon.spawn_point(), DVec2::new(100.0, 100.0));

        let mut dungeon = dungeon;
        assert_eq!(dungeon.random_walkable_position(), DVec2::new(100.0, 100.0));
    }

    #[test]
    fn test_spawn_point_is_first_room_center() {
        let dungeon = generate_dungeon(2024, 100, 100);
        let (cx, cy) = dungeon.rooms()[0].center();
        assert_eq!(
            dungeon.spawn_point(),
            DVec2::new(cx as f64 * 32.0, cy as f64 * 32.0)
        );
    }

    #[test]
    fn test_random_walkable_position_lands_in_a_room() {
        let mut dungeon = generate_dungeon(55, 100, 100);
        for _ in 0..50 {
            let pos = dungeon.random_walkable_position();
            let (tx, ty) = TileGrid::world_to_tile(pos);
            let inside = dungeon
                .rooms()
                .iter()
                .any(|room| room.contains(tx as usize, ty as usize));
            assert!(inside);
        }
    }

    #[test]
    fn test_random_walkable_positions_reproducible() {
        let mut a = generate_dungeon(9, 100, 100);
        let mut b = generate_dungeon(9, 100, 100);
        for _ in 0..10 {
            assert_eq!(a.random_walkable_position(), b.random_walkable_position());
        }
    }
}
