use chrono::NaiveDate;

use crate::app::AppState;
use crate::calendar::{badge_label, GridCell};

#[derive(Debug, Clone, PartialEq)]
pub struct MonthLayout {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Week>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Week {
    pub days: Vec<DayCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub day: Option<u32>,
    pub is_selected: bool,
    pub is_today: bool,
    pub is_focused: bool,
    pub event_count: usize,
}

impl DayCell {
    pub fn empty() -> Self {
        Self::new(None)
    }

    pub fn new(day: Option<u32>) -> Self {
        Self {
            day,
            is_selected: false,
            is_today: false,
            is_focused: false,
            event_count: 0,
        }
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self
    }

    pub fn with_today(mut self, today: bool) -> Self {
        self.is_today = today;
        self
    }

    pub fn with_focused(mut self, focused: bool) -> Self {
        self.is_focused = focused;
        self
    }

    pub fn with_events(mut self, count: usize) -> Self {
        self.event_count = count;
        self
    }

    pub fn has_events(&self) -> bool {
        self.event_count > 0
    }

    pub fn badge(&self) -> Option<String> {
        badge_label(self.event_count)
    }
}

/// Lays the displayed month out as rows of seven, Sunday first. The last row
/// is not padded.
pub fn calculate_layout(state: &AppState, today: NaiveDate) -> MonthLayout {
    let cells: Vec<DayCell> = state
        .displayed
        .grid()
        .into_iter()
        .map(|cell| match cell {
            GridCell::Empty => DayCell::empty(),
            GridCell::Day(day) => DayCell::new(Some(day))
                .with_selected(state.is_selected(day))
                .with_today(state.is_today(day, today))
                .with_focused(day == state.focused_day)
                .with_events(state.events_for_day(day).len()),
        })
        .collect();

    let weeks = cells
        .chunks(7)
        .map(|days| Week { days: days.to_vec() })
        .collect();

    MonthLayout {
        year: state.displayed.year(),
        month: state.displayed.month(),
        weeks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{DisplayedMonth, EventDraft};
    use pretty_assertions::assert_eq;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn state_at(year: i32, month0: i32) -> AppState {
        AppState::starting_at(DisplayedMonth::new(year, month0).unwrap())
    }

    fn add_events(state: &mut AppState, day: u32, count: usize) {
        for i in 0..count {
            state.select_day(day);
            state.form.draft = EventDraft::new(format!("Event {}", i));
            state.submit_event();
        }
    }

    #[test]
    fn month_layout_has_correct_year_and_month() {
        let layout = calculate_layout(&state_at(2025, 0), date(2025, 1, 1));
        assert_eq!((layout.year, layout.month), (2025, 1));
    }

    #[test]
    fn first_week_starts_with_blanks_up_to_weekday_of_first() {
        // February 2024 starts on a Thursday.
        let layout = calculate_layout(&state_at(2024, 1), date(2024, 1, 1));
        let first: Vec<Option<u32>> = layout.weeks[0].days.iter().map(|c| c.day).collect();
        assert_eq!(first, vec![None, None, None, None, Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn last_week_is_not_padded() {
        let layout = calculate_layout(&state_at(2024, 1), date(2024, 1, 1));
        assert_eq!(layout.weeks.len(), 5);
        let last = layout.weeks.last().unwrap();
        assert_eq!(last.days.len(), 5);
        assert_eq!(last.days.last().unwrap().day, Some(29));
    }

    #[test]
    fn today_is_marked() {
        let layout = calculate_layout(&state_at(2026, 9), date(2026, 10, 18));
        let today: Vec<u32> = layout
            .weeks
            .iter()
            .flat_map(|w| &w.days)
            .filter(|c| c.is_today)
            .filter_map(|c| c.day)
            .collect();
        assert_eq!(today, vec![18]);
    }

    #[test]
    fn selected_day_is_marked() {
        let mut state = state_at(2024, 1);
        state.select_day(29);
        let layout = calculate_layout(&state, date(2024, 1, 1));
        let cell = layout.weeks[4].days.last().unwrap();
        assert!(cell.is_selected);
    }

    #[test]
    fn event_counts_feed_badges() {
        let mut state = state_at(2024, 1);
        add_events(&mut state, 1, 3);
        add_events(&mut state, 2, 4);
        let layout = calculate_layout(&state, date(2024, 1, 1));
        let first_week = &layout.weeks[0].days;

        assert_eq!(first_week[4].badge().as_deref(), Some("3"));
        assert_eq!(first_week[5].badge().as_deref(), Some("3+"));
        assert_eq!(first_week[6].badge(), None);
        assert!(!first_week[6].has_events());
    }
}
