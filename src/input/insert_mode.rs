use crossterm::event::KeyCode;

use crate::app::{AppState, FormField};

/// Longest accepted time entry, `HH:MM`.
const TIME_INPUT_MAX: usize = 5;

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Esc => state.cancel_event_form(),
        KeyCode::Enter => {
            state.submit_event();
        }
        KeyCode::Tab => state.form.next_field(),
        KeyCode::BackTab => state.form.prev_field(),
        KeyCode::Backspace => {
            state.form.active_buffer_mut().pop();
        }
        KeyCode::Char(c) => {
            let form = &mut state.form;
            match form.active_field {
                FormField::Time => {
                    if (c.is_ascii_digit() || c == ':') && form.draft.time.len() < TIME_INPUT_MAX {
                        form.draft.time.push(c);
                    }
                }
                _ => form.active_buffer_mut().push(c),
            }
        }
        _ => {}
    }
}
