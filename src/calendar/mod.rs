pub mod event;
pub mod event_store;
pub mod month;

pub use event::{DateKey, EventDraft, EventError, EventId, EventRecord};
pub use event_store::{badge_label, EventStore};
pub use month::{DisplayedMonth, GridCell};
