//! Side panels: player stats, active buffs, and the message feed.

use delve::core::{GameState, HudSnapshot, Severity};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

pub fn draw_side_panel(frame: &mut Frame, area: Rect, state: &GameState, hud: &HudSnapshot) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Min(4),
            Constraint::Length(8),
        ])
        .split(area);

    draw_health(frame, chunks[0], hud);
    draw_experience(frame, chunks[1], hud);
    draw_stats(frame, chunks[2], state, hud);
    draw_buffs(frame, chunks[3], state);
    draw_messages(frame, chunks[4], state);
}

fn draw_health(frame: &mut Frame, area: Rect, hud: &HudSnapshot) {
    let ratio = if hud.max_health == 0 {
        0.0
    } else {
        hud.health as f64 / hud.max_health as f64
    };
    let color = if ratio > 0.66 {
        Color::Green
    } else if ratio > 0.33 {
        Color::Yellow
    } else {
        Color::Red
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Health"))
        .gauge_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .label(format!("{}/{}", hud.health, hud.max_health))
        .ratio(ratio.clamp(0.0, 1.0));
    frame.render_widget(gauge, area);
}

fn draw_experience(frame: &mut Frame, area: Rect, hud: &HudSnapshot) {
    let ratio = if hud.experience_to_next_level == 0 {
        0.0
    } else {
        hud.experience as f64 / hud.experience_to_next_level as f64
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Level {}", hud.level)),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .label(format!("{}/{} XP", hud.experience, hud.experience_to_next_level))
        .ratio(ratio.clamp(0.0, 1.0));
    frame.render_widget(gauge, area);
}

fn draw_stats(frame: &mut Frame, area: Rect, state: &GameState, hud: &HudSnapshot) {
    let stats = &state.player.stats;
    let lines = vec![
        Line::from(vec![
            Span::styled("Gold    ", Style::default().fg(Color::Gray)),
            Span::styled(hud.gold.to_string(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(format!("Damage  {}   Defense {}", stats.damage, stats.defense)),
        Line::from(format!(
            "Crit    {:.0}%  x{:.1}",
            stats.critical_chance * 100.0,
            stats.critical_multiplier
        )),
        Line::from(format!(
            "Potions {}   Enemies {}",
            hud.potions,
            state.enemies.len()
        )),
    ];

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Stats"));
    frame.render_widget(paragraph, area);
}

fn draw_buffs(frame: &mut Frame, area: Rect, state: &GameState) {
    let items: Vec<ListItem> = state
        .buff_status()
        .into_iter()
        .map(|status| {
            // Ten-cell bar of the remaining duration
            let filled = (status.fraction_remaining * 10.0).round() as usize;
            let bar = format!("{}{}", "▰".repeat(filled), "▱".repeat(10 - filled.min(10)));
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<12}", status.name),
                    Style::default().fg(Color::LightMagenta),
                ),
                Span::raw(format!(" {} {}", bar, status.label)),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Buffs"));
    frame.render_widget(list, area);
}

fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Info => Style::default().fg(Color::White),
        Severity::Damage => Style::default().fg(Color::Red),
        Severity::Critical => Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
        Severity::LevelUp => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        Severity::Heal => Style::default().fg(Color::Green),
    }
}

fn draw_messages(frame: &mut Frame, area: Rect, state: &GameState) {
    let items: Vec<ListItem> = state
        .messages
        .iter()
        .map(|message| ListItem::new(Span::styled(message.text.clone(), severity_style(message.severity))))
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Log"));
    frame.render_widget(list, area);
}
