pub mod calendar;
pub mod input;
pub mod ui;
pub mod storage;
pub mod app;

pub use calendar::{DateKey, DisplayedMonth, EventDraft, EventId, EventRecord, EventStore};
pub use app::{AppState, Effect, Mode, ThemeMode};

pub use input::{insert_mode, mouse, normal_mode};
