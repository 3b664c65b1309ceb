use chrono::{Datelike, NaiveDate};

pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// The month currently shown in the grid, stored as its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayedMonth {
    first: NaiveDate,
}

impl DisplayedMonth {
    /// Builds a month from a year and a 0-based month index. Out of range
    /// indices are normalized into the neighbouring years.
    pub fn new(year: i32, month0: i32) -> Option<Self> {
        let total = year.checked_mul(12)?.checked_add(month0)?;
        let year = total.div_euclid(12);
        let month = total.rem_euclid(12) as u32 + 1;
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self { first: date.with_day(1).unwrap_or(date) }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// 0 = January.
    pub fn month0(&self) -> u32 {
        self.first.month0()
    }

    /// 1 = January.
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.month0() as usize]
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.name(), self.year())
    }

    /// Moves by `direction` months, rolling the year over as needed. Stays put
    /// if the result falls outside chrono's representable range.
    pub fn navigate(&self, direction: i32) -> Self {
        Self::new(self.year(), self.month0() as i32 + direction).unwrap_or(*self)
    }

    /// Day-of-month of the day before the next month's first day.
    pub fn days_in_month(&self) -> u32 {
        let next = self.navigate(1);
        if next == *self {
            return 31;
        }
        next.first.pred_opt().map(|last| last.day()).unwrap_or(31)
    }

    /// Weekday of the 1st, with Sunday as 0.
    pub fn leading_blanks(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    pub fn date_of(&self, day: u32) -> Option<NaiveDate> {
        if day == 0 || day > self.days_in_month() {
            return None;
        }
        self.first.with_day(day)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    pub fn grid(&self) -> Vec<GridCell> {
        let mut cells = Vec::with_capacity(42);
        cells.extend((0..self.leading_blanks()).map(|_| GridCell::Empty));
        cells.extend((1..=self.days_in_month()).map(GridCell::Day));
        cells
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    Empty,
    Day(u32),
}

impl GridCell {
    pub fn day(&self) -> Option<u32> {
        match self {
            GridCell::Empty => None,
            GridCell::Day(day) => Some(*day),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn month(year: i32, month0: i32) -> DisplayedMonth {
        DisplayedMonth::new(year, month0).unwrap()
    }

    #[test]
    fn leap_february_has_29_days() {
        assert_eq!(month(2024, 1).days_in_month(), 29);
    }

    #[test]
    fn common_february_has_28_days() {
        assert_eq!(month(2023, 1).days_in_month(), 28);
        assert_eq!(month(1900, 1).days_in_month(), 28);
        assert_eq!(month(2000, 1).days_in_month(), 29);
    }

    #[test]
    fn thirty_and_thirty_one_day_months() {
        assert_eq!(month(2025, 3).days_in_month(), 30);
        assert_eq!(month(2025, 11).days_in_month(), 31);
    }

    #[test]
    fn december_rolls_into_next_january() {
        let next = month(2024, 11).navigate(1);
        assert_eq!((next.year(), next.month0()), (2025, 0));
    }

    #[test]
    fn january_rolls_back_into_previous_december() {
        let prev = month(2024, 0).navigate(-1);
        assert_eq!((prev.year(), prev.month0()), (2023, 11));
    }

    #[test]
    fn september_2024_starts_on_sunday() {
        assert_eq!(month(2024, 8).leading_blanks(), 0);
    }

    #[test]
    fn february_2024_grid_has_four_blanks_then_29_days() {
        let cells = month(2024, 1).grid();
        assert_eq!(cells.len(), 33);
        assert!(cells[..4].iter().all(|c| *c == GridCell::Empty));
        assert_eq!(cells[4], GridCell::Day(1));
        assert_eq!(cells.last(), Some(&GridCell::Day(29)));
    }

    #[test]
    fn containing_mid_month_date_starts_on_the_first() {
        let feb = DisplayedMonth::containing(NaiveDate::from_ymd_opt(2024, 2, 16).unwrap());
        assert_eq!(feb, month(2024, 1));
        assert_eq!(feb.leading_blanks(), 4);
        assert_eq!(feb.grid().len(), 33);
    }

    #[test]
    fn date_of_rejects_days_outside_month() {
        let feb = month(2023, 1);
        assert_eq!(feb.date_of(0), None);
        assert_eq!(feb.date_of(29), None);
        assert_eq!(feb.date_of(28), NaiveDate::from_ymd_opt(2023, 2, 28));
    }

    #[test]
    fn label_uses_english_month_name() {
        assert_eq!(month(2026, 9).label(), "October 2026");
    }

    proptest! {
        #[test]
        fn grid_matches_month_length_and_first_weekday(year in 1600i32..2600, month0 in 0i32..12) {
            let m = month(year, month0);
            let cells = m.grid();
            let days = cells.iter().filter(|c| c.day().is_some()).count() as u32;
            let blanks = cells.iter().take_while(|c| **c == GridCell::Empty).count() as u32;
            let first = NaiveDate::from_ymd_opt(year, month0 as u32 + 1, 1).unwrap();

            prop_assert_eq!(days, m.days_in_month());
            prop_assert_eq!(blanks, first.weekday().num_days_from_sunday());
            prop_assert_eq!(cells.len() as u32, blanks + days);
        }

        #[test]
        fn twelve_steps_forward_is_one_year_later(year in 1600i32..2600, month0 in 0i32..12) {
            let start = month(year, month0);
            let end = (0..12).fold(start, |m, _| m.navigate(1));
            prop_assert_eq!(end.month0(), start.month0());
            prop_assert_eq!(end.year(), start.year() + 1);
        }

        #[test]
        fn forward_then_back_is_identity(year in 1600i32..2600, month0 in 0i32..12) {
            let start = month(year, month0);
            prop_assert_eq!(start.navigate(1).navigate(-1), start);
        }
    }
}
