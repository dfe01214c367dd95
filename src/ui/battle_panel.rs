use super::{compact, ratio};
use climber::core::constants::BOSS_STAT_MULTIPLIER;
use climber::core::{is_boss_floor, zone_for_floor, GameStateView};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Player HP gauge plus effective stats, gold, and floor.
pub fn draw_player_panel(frame: &mut Frame, area: Rect, view: &GameStateView, auto_battle: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let player = &view.player;
    let hp_ratio = ratio(player.current_health as f64, player.max_health as f64);
    let hp_color = if hp_ratio > 0.66 {
        Color::Green
    } else if hp_ratio > 0.33 {
        Color::Yellow
    } else {
        Color::Red
    };

    let title = if auto_battle {
        " Player (auto) "
    } else {
        " Player "
    };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .gauge_style(Style::default().fg(hp_color).add_modifier(Modifier::BOLD))
        .label(format!("HP: {}/{}", player.current_health, player.max_health))
        .ratio(hp_ratio);
    frame.render_widget(gauge, chunks[0]);

    let lines = vec![
        Line::from(vec![
            Span::styled("ATK ", Style::default().fg(Color::DarkGray)),
            Span::styled(player.attack.to_string(), Style::default().fg(Color::Red)),
            Span::styled("  DEF ", Style::default().fg(Color::DarkGray)),
            Span::styled(player.defense.to_string(), Style::default().fg(Color::Blue)),
        ]),
        Line::from(vec![
            Span::styled("Gold ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                player.gold.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Floor ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                player.floor.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  (best {})", player.best_floor),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];
    let stats = Paragraph::new(lines)
        .block(Block::default().borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM));
    frame.render_widget(stats, chunks[1]);
}

/// Monster HP gauge with boss marker and zone.
pub fn draw_monster_panel(frame: &mut Frame, area: Rect, view: &GameStateView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let floor = view.player.floor;
    let monster = &view.monster;
    let boss = is_boss_floor(floor);
    let title = if boss {
        format!(" BOSS x{} - Floor {} ", BOSS_STAT_MULTIPLIER, floor)
    } else {
        format!(" Monster - Floor {} ", floor)
    };
    let color = if boss { Color::Magenta } else { Color::Red };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .gauge_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .label(format!(
            "HP: {}/{}",
            compact(monster.current_health),
            compact(monster.max_health)
        ))
        .ratio(ratio(monster.current_health, monster.max_health));
    frame.render_widget(gauge, chunks[0]);

    let lines = vec![
        Line::from(vec![
            Span::styled("ATK ", Style::default().fg(Color::DarkGray)),
            Span::styled(compact(monster.attack), Style::default().fg(Color::Red)),
            Span::styled("  DEF ", Style::default().fg(Color::DarkGray)),
            Span::styled(compact(monster.defense), Style::default().fg(Color::Blue)),
        ]),
        Line::from(vec![
            Span::styled("Zone ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                zone_for_floor(floor).to_string(),
                Style::default().fg(Color::Cyan),
            ),
        ]),
    ];
    let stats = Paragraph::new(lines)
        .block(Block::default().borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM));
    frame.render_widget(stats, chunks[1]);
}
