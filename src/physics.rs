//! Entity-vs-tile collision and radius queries over a [`TileGrid`].

use crate::combat::Combatant;
use crate::core::constants::TILE_SIZE;
use crate::dungeon::{Tile, TileGrid};
use glam::DVec2;

/// A tile reported by a radius query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileHit {
    pub x: i64,
    pub y: i64,
    pub tile: Tile,
}

/// True when any tile overlapped by the box centred on `center` is a wall.
///
/// The covered tile range is inclusive on both ends, so a box whose edge sits
/// exactly on a tile boundary also tests the tile beyond it.
pub fn check_collision(grid: &TileGrid, center: DVec2, width: f64, height: f64) -> bool {
    let half = DVec2::new(width / 2.0, height / 2.0);
    let min = center - half;
    let max = center + half;

    let left = (min.x / TILE_SIZE).floor() as i64;
    let right = (max.x / TILE_SIZE).floor() as i64;
    let top = (min.y / TILE_SIZE).floor() as i64;
    let bottom = (max.y / TILE_SIZE).floor() as i64;

    (top..=bottom).any(|y| (left..=right).any(|x| grid.is_wall(x, y)))
}

/// Every tile whose centre lies within `radius` of `center`.
pub fn tiles_in_radius(grid: &TileGrid, center: DVec2, radius: f64) -> Vec<TileHit> {
    let (cx, cy) = TileGrid::world_to_tile(center);
    let reach = (radius / TILE_SIZE).ceil() as i64;

    let mut hits = Vec::new();
    for y in cy - reach..=cy + reach {
        for x in cx - reach..=cx + reach {
            let tile_center = TileGrid::tile_to_world(x, y) + DVec2::splat(TILE_SIZE / 2.0);
            if tile_center.distance(center) <= radius {
                hits.push(TileHit {
                    x,
                    y,
                    tile: grid.tile(x, y),
                });
            }
        }
    }
    hits
}

pub fn entities_overlap(a: DVec2, b: DVec2, radius_a: f64, radius_b: f64) -> bool {
    a.distance(b) < radius_a + radius_b
}

/// Circle against an axis-aligned rectangle given by its top-left corner and size.
pub fn circle_intersects_rect(center: DVec2, radius: f64, origin: DVec2, size: DVec2) -> bool {
    let closest = center.clamp(origin, origin + size);
    closest.distance(center) < radius
}

/// Rejects the last move if it put the box into a wall. Returns whether it did.
pub fn resolve_collision(grid: &TileGrid, combatant: &mut Combatant, width: f64, height: f64) -> bool {
    if !check_collision(grid, combatant.position, width, height) {
        return false;
    }
    combatant.rollback();
    combatant.velocity = DVec2::ZERO;
    true
}
