//! Tile grid and room data structures.

use crate::core::constants::TILE_SIZE;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Classification of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Tile {
    Floor = 0,
    Wall = 1,
    Chest = 2,
}

impl Tile {
    /// Numeric tile code (Floor=0, Wall=1, Chest=2)
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Tile::Floor),
            1 => Some(Tile::Wall),
            2 => Some(Tile::Chest),
            _ => None,
        }
    }

    pub fn is_walkable(self) -> bool {
        matches!(self, Tile::Floor | Tile::Chest)
    }
}

/// Axis-aligned room rectangle in tile coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Room {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center tile, rounded down on both axes
    pub fn center(&self) -> (usize, usize) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// True if the rooms intersect once either is inflated by one tile.
    pub fn overlaps_with_margin(&self, other: &Room) -> bool {
        self.x < other.x + other.width + 1
            && self.x + self.width + 1 > other.x
            && self.y < other.y + other.height + 1
            && self.y + self.height + 1 > other.y
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// The generated map: tile codes plus which chests have been opened.
///
/// Reads outside the grid return [`Tile::Wall`], so nothing can leave the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    opened_chests: HashSet<(i64, i64)>,
}

impl TileGrid {
    /// Creates a grid filled with walls
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::Wall; width * height],
            opened_chests: HashSet::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn tile(&self, x: i64, y: i64) -> Tile {
        self.index(x, y)
            .map(|i| self.tiles[i])
            .unwrap_or(Tile::Wall)
    }

    /// Out-of-bounds writes are ignored.
    pub fn set_tile(&mut self, x: i64, y: i64, tile: Tile) {
        if let Some(i) = self.index(x, y) {
            self.tiles[i] = tile;
        }
    }

    pub fn is_walkable(&self, x: i64, y: i64) -> bool {
        self.tile(x, y).is_walkable()
    }

    pub fn is_wall(&self, x: i64, y: i64) -> bool {
        self.tile(x, y) == Tile::Wall
    }

    pub fn is_chest(&self, x: i64, y: i64) -> bool {
        self.tile(x, y) == Tile::Chest
    }

    pub fn open_chest(&mut self, x: i64, y: i64) {
        self.opened_chests.insert((x, y));
    }

    pub fn is_chest_opened(&self, x: i64, y: i64) -> bool {
        self.opened_chests.contains(&(x, y))
    }

    pub fn opened_chest_count(&self) -> usize {
        self.opened_chests.len()
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Raw tile codes in row-major order
    pub fn codes(&self) -> Vec<u8> {
        self.tiles.iter().map(|t| t.code()).collect()
    }

    /// Top-left corner of a tile in world units
    pub fn tile_to_world(x: i64, y: i64) -> DVec2 {
        DVec2::new(x as f64 * TILE_SIZE, y as f64 * TILE_SIZE)
    }

    pub fn world_to_tile(position: DVec2) -> (i64, i64) {
        (
            (position.x / TILE_SIZE).floor() as i64,
            (position.y / TILE_SIZE).floor() as i64,
        )
    }

    /// World-space size of the whole grid
    pub fn world_size(&self) -> DVec2 {
        DVec2::new(
            self.width as f64 * TILE_SIZE,
            self.height as f64 * TILE_SIZE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_wall() {
        let grid = TileGrid::new(4, 3);
        assert_eq!(grid.count(Tile::Wall), 12);
        assert_eq!(grid.count(Tile::Floor), 0);
    }

    #[test]
    fn test_out_of_bounds_reads_wall() {
        let mut grid = TileGrid::new(2, 2);
        grid.set_tile(0, 0, Tile::Floor);
        assert_eq!(grid.tile(-1, 0), Tile::Wall);
        assert_eq!(grid.tile(0, -1), Tile::Wall);
        assert_eq!(grid.tile(2, 0), Tile::Wall);
        assert_eq!(grid.tile(0, 2), Tile::Wall);
        assert_eq!(grid.tile(0, 0), Tile::Floor);
    }

    #[test]
    fn test_out_of_bounds_write_is_ignored() {
        let mut grid = TileGrid::new(2, 2);
        grid.set_tile(5, 5, Tile::Floor);
        grid.set_tile(-1, 0, Tile::Floor);
        assert_eq!(grid.count(Tile::Floor), 0);
    }

    #[test]
    fn test_chest_is_walkable_and_openable() {
        let mut grid = TileGrid::new(3, 3);
        grid.set_tile(1, 1, Tile::Chest);
        assert!(grid.is_walkable(1, 1));
        assert!(grid.is_chest(1, 1));
        assert!(!grid.is_chest_opened(1, 1));
        grid.open_chest(1, 1);
        assert!(grid.is_chest_opened(1, 1));
        // Opening does not change the tile code
        assert_eq!(grid.tile(1, 1), Tile::Chest);
    }

    #[test]
    fn test_world_tile_conversion() {
        assert_eq!(TileGrid::tile_to_world(3, 2), DVec2::new(96.0, 64.0));
        assert_eq!(TileGrid::world_to_tile(DVec2::new(95.9, 64.0)), (2, 2));
        assert_eq!(TileGrid::world_to_tile(DVec2::new(-0.5, 0.0)), (-1, 0));
    }

    #[test]
    fn test_room_overlap_requires_gap() {
        let a = Room::new(1, 1, 6, 6);
        // Touching edge-to-edge still overlaps once inflated
        let touching = Room::new(7, 1, 6, 6);
        assert!(a.overlaps_with_margin(&touching));
        // A single tile of separation is enough
        let one_gap = Room::new(8, 1, 6, 6);
        assert!(!a.overlaps_with_margin(&one_gap));
        let far = Room::new(20, 20, 6, 6);
        assert!(!a.overlaps_with_margin(&far));
    }

    #[test]
    fn test_room_center_rounds_down() {
        let room = Room::new(10, 4, 7, 6);
        assert_eq!(room.center(), (13, 7));
    }

    #[test]
    fn test_tile_codes() {
        assert_eq!(Tile::Floor.code(), 0);
        assert_eq!(Tile::Wall.code(), 1);
        assert_eq!(Tile::Chest.code(), 2);
        assert_eq!(Tile::from_code(2), Some(Tile::Chest));
        assert_eq!(Tile::from_code(9), None);
    }
}
