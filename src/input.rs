//! Input handling for the game screen.

use crate::app::App;
use climber::core::UpgradeStat;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of handling a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue the game loop normally.
    Continue,
    /// Leave the game loop and restore the terminal.
    Quit,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputResult {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputResult::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return InputResult::Quit,
        KeyCode::Char(' ') => app.toggle_auto(),
        KeyCode::Char('b') | KeyCode::Char('B') => {
            app.battle_once();
        }
        KeyCode::Char('h') | KeyCode::Char('H') => app.upgrade(UpgradeStat::Health),
        KeyCode::Char('a') | KeyCode::Char('A') => app.upgrade(UpgradeStat::Attack),
        KeyCode::Char('d') | KeyCode::Char('D') => app.upgrade(UpgradeStat::Defense),
        KeyCode::Char('m') | KeyCode::Char('M') => app.cycle_batch(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Enter => app.equip_selected(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.reset(),
        _ => {}
    }
    InputResult::Continue
}
