use climber::core::economy::series_sum;
use climber::core::{GameStateView, UpgradeStat};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_upgrade_panel(frame: &mut Frame, area: Rect, view: &GameStateView, batch: u64) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(format!(" Upgrades x{batch} "));

    let mut lines = Vec::new();
    for (key, stat) in [
        ("H", UpgradeStat::Health),
        ("A", UpgradeStat::Attack),
        ("D", UpgradeStat::Defense),
    ] {
        // Batch cost continues the series from the next single-unit price
        let start = view.upgrade_costs.get(stat);
        let cost = series_sum(start, batch);
        let affordable = view.player.gold >= cost;
        let cost_style = if affordable {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{key}] "),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("{:<8}", stat.name())),
            Span::styled(format!("{cost} gold"), cost_style),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[M] change batch size",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
