//! Day-keyed event store backed by a single storage slot.
//!
//! The whole mapping is read once by [`EventStore::load`] and written back
//! in full after every mutation. Reads never touch storage.

use std::collections::{BTreeMap, HashMap};

use crate::day_key::DayKey;
use crate::error::{MonthcalError, MonthcalResult};
use crate::event::Event;
use crate::month::YearMonth;
use crate::storage::Storage;

/// Slot holding the serialized event mapping.
pub const STORAGE_KEY: &str = "calendar-events";

type EventMap = BTreeMap<DayKey, Vec<Event>>;

pub struct EventStore<S: Storage> {
    storage: S,
    events: EventMap,
}

impl<S: Storage> EventStore<S> {
    /// Read the mapping from `storage`. An absent slot is an empty store;
    /// unreadable content is `CorruptStore`.
    pub fn load(storage: S) -> MonthcalResult<Self> {
        let events = match storage.get(STORAGE_KEY)? {
            Some(raw) => decode(&raw)?,
            None => EventMap::new(),
        };
        tracing::debug!(days = events.len(), "event store loaded");
        Ok(EventStore { storage, events })
    }

    /// Like [`EventStore::load`], but a corrupt slot is logged and replaced
    /// by an empty store. Storage read failures still propagate.
    pub fn load_or_default(storage: S) -> MonthcalResult<Self> {
        let events = match storage.get(STORAGE_KEY)? {
            Some(raw) => decode(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring corrupt event store");
                EventMap::new()
            }),
            None => EventMap::new(),
        };
        Ok(EventStore { storage, events })
    }

    /// Events of one day, earliest first. Events at the same time keep
    /// their stored order.
    pub fn events_for_day(&self, year: i32, month: u32, day: u32) -> Vec<Event> {
        let mut events = self
            .events
            .get(&DayKey::new(year, month, day))
            .cloned()
            .unwrap_or_default();
        events.sort_by(|a, b| a.time.cmp(&b.time));
        events
    }

    pub fn event(&self, year: i32, month: u32, day: u32, id: &str) -> Option<&Event> {
        self.events
            .get(&DayKey::new(year, month, day))?
            .iter()
            .find(|e| e.id == id)
    }

    /// Replace the event with the same id on that day, or append it, then
    /// persist the whole mapping.
    pub fn upsert(&mut self, year: i32, month: u32, day: u32, event: Event) -> MonthcalResult<()> {
        let key = DayKey::new(year, month, day);
        let day_events = self.events.entry(key).or_default();

        let replaced = match day_events.iter_mut().find(|e| e.id == event.id) {
            Some(existing) => {
                *existing = event;
                true
            }
            None => {
                day_events.push(event);
                false
            }
        };
        tracing::debug!(day = %key, replaced, "event upserted");

        self.save()
    }

    /// Number of events per day for the days of `month` that have any.
    pub fn days_with_events(&self, month: YearMonth) -> BTreeMap<u32, usize> {
        let from = DayKey::new(month.year(), month.month(), 0);
        let to = DayKey::new(month.year(), month.month(), u32::MAX);
        self.events
            .range(from..=to)
            .filter(|(_, events)| !events.is_empty())
            .map(|(key, events)| (key.day(), events.len()))
            .collect()
    }

    /// Total number of events across all days.
    pub fn len(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Write the entire mapping to the slot.
    pub fn save(&mut self) -> MonthcalResult<()> {
        let content = serde_json::to_string(&self.events)
            .map_err(|e| MonthcalError::Serialization(e.to_string()))?;
        self.storage.set(STORAGE_KEY, &content)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

/// Decode the stored JSON object. Keys written in the older unpadded form
/// are folded into their canonical key. When both forms hold an event with
/// the same id, the copy under the canonical key is kept.
fn decode(raw: &str) -> MonthcalResult<EventMap> {
    let corrupt = |reason: String| MonthcalError::CorruptStore {
        key: STORAGE_KEY.to_string(),
        reason,
    };

    let stored: HashMap<String, Vec<Event>> =
        serde_json::from_str(raw).map_err(|e| corrupt(e.to_string()))?;

    let mut parsed = Vec::with_capacity(stored.len());
    for (text, day_events) in stored {
        let key: DayKey = text.parse().map_err(|e: MonthcalError| corrupt(e.to_string()))?;
        let legacy = key.to_string() != text;
        parsed.push((key, legacy, text, day_events));
    }
    // Canonical spellings first, then legacy ones in a stable order
    parsed.sort_by(|a, b| (a.0, a.1, &a.2).cmp(&(b.0, b.1, &b.2)));

    let mut events = EventMap::new();
    for (key, legacy, _, day_events) in parsed {
        let folded = events.entry(key).or_default();
        for event in day_events {
            if folded.iter().any(|e| e.id == event.id) {
                tracing::debug!(day = %key, id = %event.id, legacy, "dropping duplicate event");
                continue;
            }
            folded.push(event);
        }
    }
    Ok(events)
}
