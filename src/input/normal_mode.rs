use chrono::NaiveDate;
use crossterm::event::KeyCode;

use crate::app::{AppState, Effect};

pub fn handle_key(key: KeyCode, state: &mut AppState, today: NaiveDate) -> Option<Effect> {
    match key {
        KeyCode::Char('h') | KeyCode::Left => state.move_focus(-1),
        KeyCode::Char('l') | KeyCode::Right => state.move_focus(1),
        KeyCode::Char('k') | KeyCode::Up => state.move_focus(-7),
        KeyCode::Char('j') | KeyCode::Down => state.move_focus(7),
        KeyCode::Char('<') | KeyCode::Char('{') | KeyCode::Char('H') | KeyCode::PageUp => state.navigate(-1),
        KeyCode::Char('>') | KeyCode::Char('}') | KeyCode::Char('L') | KeyCode::PageDown => state.navigate(1),
        KeyCode::Char('t') => state.jump_to_today(today),
        KeyCode::Char('d') => return Some(state.toggle_dark_mode()),
        KeyCode::Enter | KeyCode::Char(' ') => state.select_day(state.focused_day),
        KeyCode::Tab => state.next_event(),
        KeyCode::BackTab => state.prev_event(),
        KeyCode::Char('x') => {
            state.delete_selected_event();
        }
        _ => {}
    }
    None
}
