use crate::app::{App, LogKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws the battle log, newest first.
pub fn draw_log_panel(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Battle Log ");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = app
        .log
        .iter()
        .rev()
        .take(inner.height as usize)
        .map(|entry| {
            let (color, modifier) = match entry.kind {
                LogKind::BossVictory => (Color::Magenta, Modifier::BOLD),
                LogKind::Victory => (Color::Green, Modifier::empty()),
                LogKind::Defeat => (Color::Red, Modifier::BOLD),
                LogKind::Hit => (Color::White, Modifier::empty()),
                LogKind::Loot => (Color::Yellow, Modifier::BOLD),
                LogKind::Info => (Color::Cyan, Modifier::empty()),
                LogKind::Error => (Color::LightRed, Modifier::ITALIC),
            };
            Line::from(vec![
                Span::styled(
                    entry.timestamp.format("%H:%M:%S ").to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    entry.message.clone(),
                    Style::default().fg(color).add_modifier(modifier),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
