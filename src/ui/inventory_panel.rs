use super::rarity_color;
use crate::app::App;
use climber::core::GameStateView;
use climber::items::{Item, ItemSlot};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Equipped gear on top, then the selectable bag and materials.
pub fn draw_inventory_panel(frame: &mut Frame, area: Rect, app: &App, view: &GameStateView) {
    let inventory = &view.inventory;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(
            " Inventory ({} bag, {} materials) ",
            inventory.bag.len(),
            inventory.materials.len()
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let equipped = vec![
        equipped_line(ItemSlot::Weapon, inventory.weapon.as_ref()),
        equipped_line(ItemSlot::Armor, inventory.armor.as_ref()),
    ];
    frame.render_widget(Paragraph::new(equipped), chunks[0]);

    let items: Vec<ListItem> = inventory
        .bag
        .iter()
        .chain(inventory.materials.iter())
        .map(item_row)
        .collect();

    if items.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "  No items yet",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let selected = app.selected.min(items.len() - 1);
    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, chunks[1], &mut state);
}

fn equipped_line(slot: ItemSlot, item: Option<&Item>) -> Line<'static> {
    let label = Span::styled(
        format!("{:<7}", slot.name()),
        Style::default().fg(Color::DarkGray),
    );
    match item {
        Some(item) => Line::from(vec![
            label,
            Span::styled(
                item.name.clone(),
                Style::default()
                    .fg(rarity_color(item.rarity))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", item.stats.summary()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        None => Line::from(vec![
            label,
            Span::styled("(empty)", Style::default().fg(Color::DarkGray)),
        ]),
    }
}

fn item_row(item: &Item) -> ListItem<'static> {
    let color = rarity_color(item.rarity);
    let mut spans = vec![
        Span::styled(
            format!("[{}] ", item.rarity.name()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(item.name.clone(), Style::default().fg(color)),
        Span::styled(
            format!("  {} z{}", item.slot.name(), item.zone),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    let stats = item.stats.summary();
    if !stats.is_empty() {
        spans.push(Span::styled(
            format!("  {stats}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    ListItem::new(Line::from(spans))
}
