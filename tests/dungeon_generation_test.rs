//! Structural guarantees of generated maps, checked over many seeds.

use delve::dungeon::{generate_dungeon, Room, Tile, TileGrid};
use std::collections::{HashSet, VecDeque};

fn reachable_from(grid: &TileGrid, start: (i64, i64)) -> HashSet<(i64, i64)> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    if grid.is_walkable(start.0, start.1) {
        seen.insert(start);
        queue.push_back(start);
    }
    while let Some((x, y)) = queue.pop_front() {
        for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            let next = (x + dx, y + dy);
            if grid.is_walkable(next.0, next.1) && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

fn room_tiles(room: &Room) -> impl Iterator<Item = (i64, i64)> + '_ {
    (room.y..room.y + room.height)
        .flat_map(move |y| (room.x..room.x + room.width).map(move |x| (x as i64, y as i64)))
}

#[test]
fn test_generation_is_byte_identical_per_seed() {
    for seed in [0, 1, 42, 99_999, u32::MAX] {
        let a = generate_dungeon(seed, 100, 100);
        let b = generate_dungeon(seed, 100, 100);
        assert_eq!(a.grid.codes(), b.grid.codes(), "seed {}", seed);
        assert_eq!(a.rooms(), b.rooms(), "seed {}", seed);
    }
}

#[test]
fn test_every_room_reachable_from_spawn() {
    for seed in 0..40 {
        let dungeon = generate_dungeon(seed, 100, 100);
        let spawn = TileGrid::world_to_tile(dungeon.spawn_point());
        let reachable = reachable_from(&dungeon.grid, spawn);

        for room in dungeon.rooms() {
            for tile in room_tiles(room) {
                assert!(
                    reachable.contains(&tile),
                    "seed {}: tile {:?} of {:?} unreachable",
                    seed,
                    tile,
                    room
                );
            }
        }
    }
}

#[test]
fn test_rooms_keep_a_one_tile_gap() {
    for seed in 0..40 {
        let dungeon = generate_dungeon(seed, 100, 100);
        let rooms = dungeon.rooms();
        for (i, a) in rooms.iter().enumerate() {
            for b in &rooms[i + 1..] {
                let separated_x = a.x >= b.x + b.width + 1 || b.x >= a.x + a.width + 1;
                let separated_y = a.y >= b.y + b.height + 1 || b.y >= a.y + a.height + 1;
                assert!(separated_x || separated_y, "seed {}: {:?} vs {:?}", seed, a, b);
            }
        }
    }
}

#[test]
fn test_only_known_tile_codes() {
    let dungeon = generate_dungeon(123, 80, 60);
    assert_eq!(dungeon.grid.codes().len(), 80 * 60);
    assert!(dungeon.grid.codes().iter().all(|&c| Tile::from_code(c).is_some()));
}

#[test]
fn test_border_stays_wall() {
    let dungeon = generate_dungeon(8, 100, 100);
    for i in 0..100 {
        assert!(dungeon.grid.is_wall(i, 0));
        assert!(dungeon.grid.is_wall(0, i));
        assert!(dungeon.grid.is_wall(i, -1));
        assert!(dungeon.grid.is_wall(100, i));
    }
}

#[test]
fn test_chests_sit_inside_rooms() {
    for seed in 0..20 {
        let dungeon = generate_dungeon(seed, 100, 100);
        let grid = &dungeon.grid;
        for y in 0..grid.height() as i64 {
            for x in 0..grid.width() as i64 {
                if grid.is_chest(x, y) {
                    assert!(dungeon
                        .rooms()
                        .iter()
                        .any(|room| room.contains(x as usize, y as usize)));
                }
            }
        }
    }
}
