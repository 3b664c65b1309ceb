use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::AppState;

/// Columns taken by one day cell: a space, the day number, a space and a
/// three column badge.
pub const CELL_WIDTH: u16 = 7;
pub const GRID_WIDTH: u16 = CELL_WIDTH * 7;

pub const MODAL_WIDTH: u16 = 60;
pub const MODAL_HEIGHT: u16 = 12;

/// Line offsets inside the modal border.
pub const MODAL_TITLE_LINE: u16 = 2;
pub const MODAL_TIME_LINE: u16 = 4;
pub const MODAL_DESCRIPTION_LINE: u16 = 6;
pub const MODAL_BUTTON_LINE: u16 = 8;
pub const CANCEL_LABEL: &str = "[Cancel]";
pub const ADD_LABEL: &str = "[Add]";
pub const BUTTON_GAP: u16 = 2;

/// Events in the selected-date panel start on this line inside its border.
pub const PANEL_FIRST_EVENT_LINE: u16 = 2;
pub const DELETE_LABEL: &str = "[x]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub grid: Rect,
    pub panel: Rect,
    pub status: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(GRID_WIDTH + 2),
            Constraint::Min(0),
        ])
        .split(rows[1]);

    ScreenLayout {
        header: rows[0],
        grid: columns[0],
        panel: columns[1],
        status: rows[2],
    }
}

/// The area inside a one cell border.
pub fn inner(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

pub fn modal_rect(area: Rect) -> Rect {
    let width = MODAL_WIDTH.min(area.width);
    let height = MODAL_HEIGHT.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderControl {
    PrevMonth,
    NextMonth,
    Today,
    ToggleTheme,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderItem {
    pub control: Option<HeaderControl>,
    pub text: String,
}

impl HeaderItem {
    fn control(control: HeaderControl, text: impl Into<String>) -> Self {
        Self { control: Some(control), text: text.into() }
    }

    fn text(text: impl Into<String>) -> Self {
        Self { control: None, text: text.into() }
    }

    pub fn width(&self) -> u16 {
        self.text.chars().count() as u16
    }
}

/// Header contents, left to right. Rendering and click mapping both walk this
/// list so they cannot drift apart.
pub fn header_items(state: &AppState) -> Vec<HeaderItem> {
    let toggle = if state.dark_mode { "[Light]" } else { "[Dark]" };
    vec![
        HeaderItem::control(HeaderControl::PrevMonth, " ‹ "),
        HeaderItem::text(format!(" {} ", state.displayed.label())),
        HeaderItem::control(HeaderControl::NextMonth, " › "),
        HeaderItem::text("   "),
        HeaderItem::control(HeaderControl::Today, "[Today]"),
        HeaderItem::text(" "),
        HeaderItem::control(HeaderControl::ToggleTheme, toggle),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::DisplayedMonth;

    #[test]
    fn layout_splits_header_body_and_status() {
        let layout = screen_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.header, Rect::new(0, 0, 100, 3));
        assert_eq!(layout.status, Rect::new(0, 27, 100, 3));
        assert_eq!(layout.grid.width, GRID_WIDTH + 2);
        assert_eq!(layout.panel.x, GRID_WIDTH + 2);
    }

    #[test]
    fn modal_is_centered() {
        let rect = modal_rect(Rect::new(0, 0, 100, 30));
        assert_eq!(rect, Rect::new(20, 9, MODAL_WIDTH, MODAL_HEIGHT));
    }

    #[test]
    fn modal_shrinks_to_small_screens() {
        let rect = modal_rect(Rect::new(0, 0, 40, 8));
        assert_eq!(rect, Rect::new(0, 0, 40, 8));
    }

    #[test]
    fn header_toggle_label_follows_mode() {
        let mut state = AppState::starting_at(DisplayedMonth::new(2024, 1).unwrap());
        assert_eq!(header_items(&state).last().unwrap().text, "[Dark]");
        state.toggle_dark_mode();
        assert_eq!(header_items(&state).last().unwrap().text, "[Light]");
    }

    #[test]
    fn header_label_shows_displayed_month() {
        let state = AppState::starting_at(DisplayedMonth::new(2024, 1).unwrap());
        assert_eq!(header_items(&state)[1].text, " February 2024 ");
    }
}
