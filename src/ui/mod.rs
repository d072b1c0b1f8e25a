//! Terminal rendering. Reads snapshots only; never mutates the session.

mod keys;
mod map_view;
mod panels;

pub use keys::{KeyAction, KeyboardInput};

use delve::core::GameState;
use map_view::MapView;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, state: &GameState, glyph_fallback: bool) {
    let size = frame.size();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(10)])
        .split(size);

    draw_header(frame, rows[0], state, glyph_fallback);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(36)])
        .split(rows[1]);

    let map_block = Block::default().borders(Borders::ALL).title(" Dungeon ");
    let map_area = map_block.inner(columns[0]);
    frame.render_widget(map_block, columns[0]);

    let snapshots = state.render_snapshots();
    frame.render_widget(MapView::new(state, &snapshots), map_area);

    let hud = state.hud();
    panels::draw_side_panel(frame, columns[1], state, &hud);

    if state.game_over {
        draw_game_over(frame, columns[0], state);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, state: &GameState, glyph_fallback: bool) {
    let mut spans = vec![
        Span::styled(" DELVE ", Style::default().fg(Color::Black).bg(Color::Yellow)),
        Span::raw(format!(
            "  seed {}  {:.0}s  [wasd] move  [e] chest  [h] potion  [q] quit",
            state.seed, state.elapsed
        )),
    ];
    if glyph_fallback {
        spans.push(Span::styled("  (glyph mode)", Style::default().fg(Color::DarkGray)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_game_over(frame: &mut Frame, area: Rect, state: &GameState) {
    let width = area.width.min(36);
    let height = area.height.min(7);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let text = vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "Level {}  Kills {}",
            state.player.level(),
            state.stats.kills
        )),
        Line::from("[r] new dungeon  [q] quit"),
    ];

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        popup,
    );
}
