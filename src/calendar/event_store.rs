use std::collections::HashMap;

use chrono::NaiveDate;

use super::event::{DateKey, EventDraft, EventError, EventId, EventRecord};

/// Day badges count up to three, then collapse to `3+`.
pub const BADGE_LIMIT: usize = 3;

/// In-memory events grouped by day, each day's list in insertion order.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    days: HashMap<DateKey, Vec<EventRecord>>,
    next_id: u64,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_event(&mut self, date: Option<NaiveDate>, draft: &EventDraft) -> Result<EventId, EventError> {
        let date = date.ok_or(EventError::NoDateSelected)?;
        if !draft.has_title() {
            return Err(EventError::EmptyTitle);
        }

        self.next_id += 1;
        let id = EventId(self.next_id);
        let record = EventRecord {
            id,
            title: draft.title.trim().to_string(),
            description: draft.parsed_description(),
            time: draft.parsed_time(),
            date,
        };

        tracing::info!("Added event {} on {}", id, record.key());
        self.days.entry(record.key()).or_default().push(record);
        Ok(id)
    }

    /// Removes one record. Unknown keys and ids are left alone.
    pub fn delete_event(&mut self, key: DateKey, id: EventId) -> Option<EventRecord> {
        let list = self.days.get_mut(&key)?;
        let Some(position) = list.iter().position(|e| e.id == id) else {
            tracing::debug!("No event {} on {}", id, key);
            return None;
        };
        let removed = list.remove(position);
        if list.is_empty() {
            self.days.remove(&key);
        }
        tracing::info!("Deleted event {} on {}", id, key);
        Some(removed)
    }

    pub fn events_for(&self, key: DateKey) -> &[EventRecord] {
        self.days.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_events(&self, key: DateKey) -> bool {
        !self.events_for(key).is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn badge_label(count: usize) -> Option<String> {
    match count {
        0 => None,
        n if n <= BADGE_LIMIT => Some(n.to_string()),
        _ => Some(format!("{}+", BADGE_LIMIT)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use pretty_assertions::assert_eq;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn store_with(titles: &[&str], on: NaiveDate) -> (EventStore, Vec<EventId>) {
        let mut store = EventStore::new();
        let ids = titles
            .iter()
            .map(|t| store.add_event(Some(on), &EventDraft::new(*t)).unwrap())
            .collect();
        (store, ids)
    }

    #[test]
    fn add_without_selected_date_is_rejected() {
        let mut store = EventStore::new();
        let result = store.add_event(None, &EventDraft::new("Lunch"));
        assert_eq!(result, Err(EventError::NoDateSelected));
        assert!(store.is_empty());
    }

    #[test]
    fn add_with_blank_title_is_rejected() {
        let mut store = EventStore::new();
        let day = date(2024, 5, 1);
        assert_eq!(store.add_event(Some(day), &EventDraft::new("")), Err(EventError::EmptyTitle));
        assert_eq!(store.add_event(Some(day), &EventDraft::new("  \n ")), Err(EventError::EmptyTitle));
        assert!(store.is_empty());
        assert!(!store.has_events(DateKey::from(day)));
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let day = date(2024, 5, 1);
        let (store, _) = store_with(&["First", "Second", "Third"], day);
        let titles: Vec<&str> = store.events_for(day.into()).iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let (_, ids) = store_with(&["a", "b", "c"], date(2024, 5, 1));
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn added_record_carries_draft_fields() {
        let mut store = EventStore::new();
        let day = date(2024, 2, 29);
        let draft = EventDraft::new("Checkup").with_time("09:30").with_description("bring card");
        let id = store.add_event(Some(day), &draft).unwrap();

        let expected = EventRecord {
            id,
            title: "Checkup".to_string(),
            description: Some("bring card".to_string()),
            time: NaiveTime::from_hms_opt(9, 30, 0),
            date: day,
        };
        assert_eq!(store.events_for(day.into()), &[expected]);
    }

    #[test]
    fn stored_title_drops_surrounding_whitespace() {
        let mut store = EventStore::new();
        let day = date(2024, 5, 1);
        store.add_event(Some(day), &EventDraft::new("  Standup \t")).unwrap();
        assert_eq!(store.events_for(day.into())[0].title, "Standup");
    }

    #[test]
    fn delete_removes_only_matching_record() {
        let day = date(2024, 5, 1);
        let (mut store, ids) = store_with(&["a", "b", "c"], day);

        let removed = store.delete_event(day.into(), ids[1]).unwrap();

        assert_eq!(removed.title, "b");
        let remaining: Vec<EventId> = store.events_for(day.into()).iter().map(|e| e.id).collect();
        assert_eq!(remaining, vec![ids[0], ids[2]]);
    }

    #[test]
    fn delete_unknown_id_is_noop() {
        let day = date(2024, 5, 1);
        let (mut store, _) = store_with(&["a"], day);
        assert_eq!(store.delete_event(day.into(), EventId(999)), None);
        assert_eq!(store.events_for(day.into()).len(), 1);
    }

    #[test]
    fn delete_unknown_key_is_noop() {
        let (mut store, ids) = store_with(&["a"], date(2024, 5, 1));
        assert_eq!(store.delete_event(DateKey::new(2024, 5, 2), ids[0]), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn deleting_last_event_clears_the_day() {
        let day = date(2024, 5, 1);
        let (mut store, ids) = store_with(&["a"], day);
        store.delete_event(day.into(), ids[0]);
        assert!(!store.has_events(day.into()));
        assert!(store.events_for(day.into()).is_empty());
    }

    #[test]
    fn badge_shows_literal_count_up_to_three() {
        assert_eq!(badge_label(0), None);
        assert_eq!(badge_label(1).as_deref(), Some("1"));
        assert_eq!(badge_label(2).as_deref(), Some("2"));
        assert_eq!(badge_label(3).as_deref(), Some("3"));
    }

    #[test]
    fn badge_collapses_above_three() {
        assert_eq!(badge_label(4).as_deref(), Some("3+"));
        assert_eq!(badge_label(17).as_deref(), Some("3+"));
    }
}
