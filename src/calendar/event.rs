use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveTime};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lookup key for a calendar day. Displays as `year-month-day` with a 1-based
/// month and no zero padding, e.g. `2024-2-29`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateKey {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateKey {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    pub id: EventId,
    pub title: String,
    pub description: Option<String>,
    pub time: Option<NaiveTime>,
    pub date: NaiveDate,
}

impl EventRecord {
    pub fn key(&self) -> DateKey {
        DateKey::from(self.date)
    }

    pub fn time_label(&self) -> Option<String> {
        self.time.map(|t| t.format("%H:%M").to_string())
    }

    /// Title followed by the time when one was given, e.g. `Checkup 09:30`.
    pub fn summary(&self) -> String {
        match self.time_label() {
            Some(time) => format!("{} {}", self.title, time),
            None => self.title.clone(),
        }
    }
}

/// Unsaved contents of the add-event form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub time: String,
}

impl EventDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::default() }
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Accepts a full `HH:MM`, or `HHMM`, `H` and `HH`. Anything else, including
    /// a half-typed `9:3`, reads as no time.
    pub fn parsed_time(&self) -> Option<NaiveTime> {
        let input = self.time.trim();
        if input.is_empty() {
            return None;
        }
        if input.len() == 5 && input.as_bytes()[2] == b':' {
            return NaiveTime::parse_from_str(input, "%H:%M").ok();
        }
        if !input.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let num: u32 = input.parse().ok()?;
        match input.len() {
            1 | 2 => NaiveTime::from_hms_opt(num, 0, 0),
            3 | 4 => NaiveTime::from_hms_opt(num / 100, num % 100, 0),
            _ => None,
        }
    }

    pub fn parsed_description(&self) -> Option<String> {
        let trimmed = self.description.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("no date is selected")]
    NoDateSelected,
    #[error("event title is empty")]
    EmptyTitle,
}
