//! Tile map widget centred on the camera.

use delve::buffs::aura_radius;
use delve::core::constants::DAMAGE_AURA_ID;
use delve::core::{EntityKind, GameState, RenderSnapshot};
use delve::dungeon::{Tile, TileGrid};
use delve::effects::EffectKind;
use glam::DVec2;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

/// Glyphs are two cells wide so tiles look roughly square.
const CELL_WIDTH: u16 = 2;

mod symbols {
    pub const WALL: &str = "██";
    pub const FLOOR: &str = "· ";
    pub const CHEST: &str = "▣ ";
    pub const CHEST_OPENED: &str = "□ ";
    pub const PLAYER: &str = "@ ";
    pub const ENEMY: &str = "e ";
    pub const PICKUP: &str = "✦ ";
}

pub struct MapView<'a> {
    state: &'a GameState,
    snapshots: &'a [RenderSnapshot],
}

impl<'a> MapView<'a> {
    pub fn new(state: &'a GameState, snapshots: &'a [RenderSnapshot]) -> Self {
        Self { state, snapshots }
    }

    fn tile_display(&self, x: i64, y: i64) -> (&'static str, Style) {
        let grid = &self.state.dungeon.grid;
        match grid.tile(x, y) {
            Tile::Wall => (symbols::WALL, Style::default().fg(Color::DarkGray)),
            Tile::Floor => (symbols::FLOOR, Style::default().fg(Color::Gray)),
            Tile::Chest if grid.is_chest_opened(x, y) => {
                (symbols::CHEST_OPENED, Style::default().fg(Color::DarkGray))
            }
            Tile::Chest => (
                symbols::CHEST,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        }
    }

    fn entity_display(snapshot: &RenderSnapshot) -> (&'static str, Style) {
        match snapshot.kind {
            EntityKind::Player => (
                symbols::PLAYER,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            EntityKind::Enemy => {
                let style = if snapshot.effects.contains(&EffectKind::CriticalFlash) {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                } else if snapshot.effects.contains(&EffectKind::AuraHit) {
                    Style::default().fg(Color::Magenta)
                } else {
                    Style::default().fg(Color::Red)
                };
                (symbols::ENEMY, style)
            }
        }
    }
}

impl Widget for MapView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = (area.width / CELL_WIDTH) as i64;
        let rows = area.height as i64;
        if columns == 0 || rows == 0 {
            return;
        }

        let camera = &self.state.camera;
        let focus = camera.position + camera.viewport / 2.0;
        let (focus_x, focus_y) = TileGrid::world_to_tile(focus);
        let left = focus_x - columns / 2;
        let top = focus_y - rows / 2;

        let cell = |tile_x: i64, tile_y: i64| -> Option<(u16, u16)> {
            let col = tile_x - left;
            let row = tile_y - top;
            if col < 0 || row < 0 || col >= columns || row >= rows {
                return None;
            }
            Some((area.x + col as u16 * CELL_WIDTH, area.y + row as u16))
        };

        for row in 0..rows {
            for col in 0..columns {
                let (sym, style) = self.tile_display(left + col, top + row);
                if let Some((x, y)) = cell(left + col, top + row) {
                    buf.set_string(x, y, sym, style);
                }
            }
        }

        for pickup in &self.state.pickups {
            let (tx, ty) = TileGrid::world_to_tile(pickup.position);
            if let Some((x, y)) = cell(tx, ty) {
                buf.set_string(
                    x,
                    y,
                    symbols::PICKUP,
                    Style::default().fg(Color::LightGreen).add_modifier(Modifier::BOLD),
                );
            }
        }

        // Enemies first so the player glyph wins a shared tile
        for snapshot in self.snapshots.iter().rev() {
            let (tx, ty) = TileGrid::world_to_tile(snapshot.position);
            if let Some((x, y)) = cell(tx, ty) {
                let (sym, style) = Self::entity_display(snapshot);
                buf.set_string(x, y, sym, style);
            }
        }

        if self.state.power_ups.has(DAMAGE_AURA_ID) {
            draw_aura_ring(buf, area, &cell, self.state.player.position, self.state.player.level());
        }
    }
}

/// Outlines the damage aura's reach around the player.
fn draw_aura_ring(
    buf: &mut Buffer,
    area: Rect,
    cell: &dyn Fn(i64, i64) -> Option<(u16, u16)>,
    center: DVec2,
    level: u32,
) {
    let radius = aura_radius(level);
    let steps = 48;
    for i in 0..steps {
        let angle = i as f64 / steps as f64 * std::f64::consts::TAU;
        let point = center + DVec2::new(angle.cos(), angle.sin()) * radius;
        let (tx, ty) = TileGrid::world_to_tile(point);
        if let Some((x, y)) = cell(tx, ty) {
            if x < area.right() && y < area.bottom() {
                buf.get_mut(x, y).set_fg(Color::LightMagenta);
            }
        }
    }
}
