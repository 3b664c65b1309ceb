use chrono::{Datelike, Local, NaiveDate};

use crate::calendar::{DateKey, DisplayedMonth, EventDraft, EventId, EventRecord, EventStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// The add-event modal is open.
    Insert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

/// Requests for the host shell. The controller never touches anything outside
/// its own state; screen-wide presentation changes come back as effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    SetRootTheme(ThemeMode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Time,
    Description,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventForm {
    pub draft: EventDraft,
    pub active_field: FormField,
}

impl EventForm {
    pub fn new() -> Self {
        Self { draft: EventDraft::default(), active_field: FormField::Title }
    }

    pub fn reset(&mut self) {
        self.draft.clear();
        self.active_field = FormField::Title;
    }

    pub fn next_field(&mut self) {
        self.active_field = match self.active_field {
            FormField::Title => FormField::Time,
            FormField::Time => FormField::Description,
            FormField::Description => FormField::Title,
        };
    }

    pub fn prev_field(&mut self) {
        self.active_field = match self.active_field {
            FormField::Title => FormField::Description,
            FormField::Time => FormField::Title,
            FormField::Description => FormField::Time,
        };
    }

    pub fn active_buffer_mut(&mut self) -> &mut String {
        match self.active_field {
            FormField::Title => &mut self.draft.title,
            FormField::Time => &mut self.draft.time,
            FormField::Description => &mut self.draft.description,
        }
    }
}

impl Default for EventForm {
    fn default() -> Self {
        Self::new()
    }
}

pub struct AppState {
    pub mode: Mode,
    pub displayed: DisplayedMonth,
    pub selected_date: Option<NaiveDate>,
    pub dark_mode: bool,
    pub events: EventStore,
    pub form: EventForm,
    /// Keyboard cursor over the grid, always a valid day of `displayed`.
    pub focused_day: u32,
    /// Keyboard cursor over the selected date's events.
    pub selected_event_index: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::starting_at(DisplayedMonth::containing(Local::now().date_naive()))
    }

    pub fn starting_at(displayed: DisplayedMonth) -> Self {
        let today = Local::now().date_naive();
        let focused_day = if displayed.contains(today) { today.day() } else { 1 };
        Self {
            mode: Mode::Normal,
            displayed,
            selected_date: None,
            dark_mode: false,
            events: EventStore::new(),
            form: EventForm::new(),
            focused_day,
            selected_event_index: 0,
        }
    }

    pub fn is_modal_open(&self) -> bool {
        self.mode == Mode::Insert
    }

    pub fn theme_mode(&self) -> ThemeMode {
        if self.dark_mode { ThemeMode::Dark } else { ThemeMode::Light }
    }

    pub fn navigate(&mut self, direction: i32) {
        self.displayed = self.displayed.navigate(direction);
        self.clamp_focus();
        tracing::info!("Showing {}", self.displayed.label());
    }

    pub fn jump_to_today(&mut self, today: NaiveDate) {
        self.displayed = DisplayedMonth::containing(today);
        self.focused_day = today.day();
        tracing::info!("Jumped to {}", self.displayed.label());
    }

    /// Selects a day of the displayed month and opens the add-event modal.
    pub fn select_day(&mut self, day: u32) {
        let Some(date) = self.displayed.date_of(day) else {
            return;
        };
        self.selected_date = Some(date);
        self.focused_day = day;
        self.selected_event_index = 0;
        self.mode = Mode::Insert;
        tracing::info!("Selected {}", date);
    }

    pub fn toggle_dark_mode(&mut self) -> Effect {
        self.dark_mode = !self.dark_mode;
        tracing::info!("Dark mode {}", if self.dark_mode { "on" } else { "off" });
        Effect::SetRootTheme(self.theme_mode())
    }

    /// Commits the draft for the selected date. A missing date or blank title
    /// leaves everything, including the open modal, untouched.
    pub fn submit_event(&mut self) -> Option<EventId> {
        match self.events.add_event(self.selected_date, &self.form.draft) {
            Ok(id) => {
                self.form.reset();
                self.mode = Mode::Normal;
                Some(id)
            }
            Err(e) => {
                tracing::debug!("Event not added: {}", e);
                None
            }
        }
    }

    pub fn cancel_event_form(&mut self) {
        self.form.reset();
        self.mode = Mode::Normal;
    }

    pub fn delete_event(&mut self, key: DateKey, id: EventId) -> Option<EventRecord> {
        let removed = self.events.delete_event(key, id);
        let remaining = self.selected_events().len();
        if self.selected_event_index >= remaining {
            self.selected_event_index = remaining.saturating_sub(1);
        }
        removed
    }

    pub fn delete_selected_event(&mut self) -> Option<EventRecord> {
        let event = self.selected_events().get(self.selected_event_index)?;
        let (key, id) = (event.key(), event.id);
        self.delete_event(key, id)
    }

    fn key_for_day(&self, day: u32) -> DateKey {
        DateKey::new(self.displayed.year(), self.displayed.month(), day)
    }

    pub fn has_event(&self, day: u32) -> bool {
        self.events.has_events(self.key_for_day(day))
    }

    pub fn events_for_day(&self, day: u32) -> &[EventRecord] {
        self.events.events_for(self.key_for_day(day))
    }

    pub fn selected_events(&self) -> &[EventRecord] {
        match self.selected_date {
            Some(date) => self.events.events_for(date.into()),
            None => &[],
        }
    }

    pub fn is_today(&self, day: u32, today: NaiveDate) -> bool {
        self.displayed.date_of(day) == Some(today)
    }

    pub fn is_selected(&self, day: u32) -> bool {
        self.selected_date.is_some() && self.displayed.date_of(day) == self.selected_date
    }

    pub fn move_focus(&mut self, delta: i64) {
        let last = self.displayed.days_in_month() as i64;
        self.focused_day = (self.focused_day as i64 + delta).clamp(1, last) as u32;
    }

    pub fn next_event(&mut self) {
        let count = self.selected_events().len();
        if count > 0 {
            self.selected_event_index = (self.selected_event_index + 1) % count;
        }
    }

    pub fn prev_event(&mut self) {
        let count = self.selected_events().len();
        if count > 0 {
            self.selected_event_index = (self.selected_event_index + count - 1) % count;
        }
    }

    fn clamp_focus(&mut self) {
        self.move_focus(0);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
