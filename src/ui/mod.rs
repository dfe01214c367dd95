mod battle_panel;
mod inventory_panel;
mod log_panel;
mod upgrade_panel;

use crate::app::App;
use climber::core::GameStateView;
use climber::items::Rarity;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Main UI drawing function
pub fn draw_ui(frame: &mut Frame, app: &App, view: &GameStateView) {
    let size = frame.size();

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),  // Player and monster
            Constraint::Length(12), // Upgrades and inventory
            Constraint::Min(5),     // Battle log
            Constraint::Length(1),  // Footer
        ])
        .split(size);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(v_chunks[0]);
    battle_panel::draw_player_panel(frame, top[0], view, app.auto_battle);
    battle_panel::draw_monster_panel(frame, top[1], view);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(v_chunks[1]);
    upgrade_panel::draw_upgrade_panel(frame, middle[0], view, app.batch_size());
    inventory_panel::draw_inventory_panel(frame, middle[1], app, view);

    log_panel::draw_log_panel(frame, v_chunks[2], app);
    draw_footer(frame, v_chunks[3]);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let keys = [
        ("Space", "auto"),
        ("B", "battle"),
        ("H/A/D", "upgrade"),
        ("M", "batch"),
        ("↑/↓", "select"),
        ("Enter", "equip"),
        ("R", "reset"),
        ("Q", "quit"),
    ];
    let mut spans = Vec::new();
    for (key, action) in keys {
        spans.push(Span::styled(
            format!(" [{key}]"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {action}")));
    }
    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

pub(crate) fn rarity_color(rarity: Rarity) -> Color {
    match rarity {
        Rarity::Common => Color::Gray,
        Rarity::Rare => Color::Blue,
        Rarity::Legendary => Color::Rgb(255, 165, 0),
        Rarity::Epic => Color::Magenta,
        Rarity::Mystic => Color::Cyan,
        Rarity::Primal => Color::Red,
        Rarity::Special => Color::LightGreen,
    }
}

/// Gauge ratio clamped to `[0, 1]`; ratatui panics outside that range.
pub(crate) fn ratio(current: f64, max: f64) -> f64 {
    if max > 0.0 {
        (current / max).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Compact number display: 1234 stays as is, larger values get K/M/B suffixes.
pub(crate) fn compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1e9 {
        format!("{:.2}B", value / 1e9)
    } else if abs >= 1e6 {
        format!("{:.2}M", value / 1e6)
    } else if abs >= 1e4 {
        format!("{:.1}K", value / 1e3)
    } else {
        format!("{:.0}", value)
    }
}
