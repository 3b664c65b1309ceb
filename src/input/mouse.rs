use chrono::NaiveDate;
use ratatui::layout::Rect;

use crate::app::{AppState, Effect, FormField};
use crate::ui::geometry::{
    contains, header_items, inner, modal_rect, screen_layout, HeaderControl, ADD_LABEL,
    BUTTON_GAP, CANCEL_LABEL, CELL_WIDTH, DELETE_LABEL, MODAL_BUTTON_LINE, MODAL_DESCRIPTION_LINE,
    MODAL_TIME_LINE, MODAL_TITLE_LINE, PANEL_FIRST_EVENT_LINE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Header(HeaderControl),
    Day(u32),
    Event(usize),
    DeleteEvent(usize),
    FormField(FormField),
    Cancel,
    Add,
    OutsideModal,
}

/// Maps a left click at `(column, row)` on a screen of size `area` to what
/// was drawn there.
pub fn hit_test(state: &AppState, area: Rect, column: u16, row: u16) -> Option<ClickTarget> {
    if state.is_modal_open() {
        return hit_test_modal(area, column, row);
    }

    let layout = screen_layout(area);
    if contains(layout.header, column, row) {
        return hit_test_header(state, inner(layout.header), column, row);
    }
    if contains(layout.grid, column, row) {
        return hit_test_grid(state, inner(layout.grid), column, row);
    }
    if contains(layout.panel, column, row) {
        return hit_test_panel(state, inner(layout.panel), column, row);
    }
    None
}

fn hit_test_header(state: &AppState, area: Rect, column: u16, row: u16) -> Option<ClickTarget> {
    if row != area.y {
        return None;
    }
    let mut x = area.x;
    for item in header_items(state) {
        let end = x + item.width();
        if column >= x && column < end {
            return item.control.map(ClickTarget::Header);
        }
        x = end;
    }
    None
}

fn hit_test_grid(state: &AppState, area: Rect, column: u16, row: u16) -> Option<ClickTarget> {
    // First line holds the weekday labels.
    if row <= area.y || column < area.x {
        return None;
    }
    let week = (row - area.y - 1) as usize;
    let weekday = ((column - area.x) / CELL_WIDTH) as usize;
    if weekday >= 7 {
        return None;
    }
    state
        .displayed
        .grid()
        .get(week * 7 + weekday)
        .and_then(|cell| cell.day())
        .map(ClickTarget::Day)
}

fn hit_test_panel(state: &AppState, area: Rect, column: u16, row: u16) -> Option<ClickTarget> {
    let first = area.y + PANEL_FIRST_EVENT_LINE;
    if row < first || column < area.x {
        return None;
    }
    let index = (row - first) as usize;
    if index >= state.selected_events().len() {
        return None;
    }
    if column < area.x + DELETE_LABEL.len() as u16 {
        Some(ClickTarget::DeleteEvent(index))
    } else {
        Some(ClickTarget::Event(index))
    }
}

fn hit_test_modal(area: Rect, column: u16, row: u16) -> Option<ClickTarget> {
    let modal = modal_rect(area);
    if !contains(modal, column, row) {
        return Some(ClickTarget::OutsideModal);
    }
    let body = inner(modal);
    if row < body.y || column < body.x {
        return None;
    }
    let line = row - body.y;
    let offset = column - body.x;
    let cancel_end = CANCEL_LABEL.len() as u16;
    let add_start = cancel_end + BUTTON_GAP;
    let add_end = add_start + ADD_LABEL.len() as u16;

    match line {
        MODAL_TITLE_LINE => Some(ClickTarget::FormField(FormField::Title)),
        MODAL_TIME_LINE => Some(ClickTarget::FormField(FormField::Time)),
        MODAL_DESCRIPTION_LINE => Some(ClickTarget::FormField(FormField::Description)),
        MODAL_BUTTON_LINE if offset < cancel_end => Some(ClickTarget::Cancel),
        MODAL_BUTTON_LINE if (add_start..add_end).contains(&offset) => Some(ClickTarget::Add),
        _ => None,
    }
}

/// Applies a click. Returns the effect the host has to carry out, if any.
pub fn handle_click(state: &mut AppState, target: ClickTarget, today: NaiveDate) -> Option<Effect> {
    match target {
        ClickTarget::Header(HeaderControl::PrevMonth) => state.navigate(-1),
        ClickTarget::Header(HeaderControl::NextMonth) => state.navigate(1),
        ClickTarget::Header(HeaderControl::Today) => state.jump_to_today(today),
        ClickTarget::Header(HeaderControl::ToggleTheme) => return Some(state.toggle_dark_mode()),
        ClickTarget::Day(day) => state.select_day(day),
        ClickTarget::Event(index) => state.selected_event_index = index,
        ClickTarget::DeleteEvent(index) => {
            state.selected_event_index = index;
            state.delete_selected_event();
        }
        ClickTarget::FormField(field) => state.form.active_field = field,
        ClickTarget::Cancel | ClickTarget::OutsideModal => state.cancel_event_form(),
        ClickTarget::Add => {
            state.submit_event();
        }
    }
    None
}

pub fn handle_left_click(state: &mut AppState, area: Rect, column: u16, row: u16, today: NaiveDate) -> Option<Effect> {
    let target = hit_test(state, area, column, row)?;
    tracing::debug!("Click at {},{} hit {:?}", column, row, target);
    handle_click(state, target, today)
}
