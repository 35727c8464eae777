//! Add/edit form for a single event.
//!
//! The editor holds the form state for one day. Saving validates the
//! fields and hands back the day and a complete event for the caller to
//! upsert; the editor itself never touches the store. Dropping the editor
//! is a cancel.

use crate::error::{INVALID_EVENT_MESSAGE, MonthcalResult};
use crate::event::Event;
use crate::validate::validate;

#[derive(Debug, Clone)]
pub struct EventEditor {
    day: u32,
    current: Option<Event>,
    time: String,
    description: String,
    error: Option<&'static str>,
}

impl EventEditor {
    /// Empty form for a new event on `day`.
    pub fn add(day: u32) -> Self {
        EventEditor {
            day,
            current: None,
            time: String::new(),
            description: String::new(),
            error: None,
        }
    }

    /// Form pre-filled from an existing event.
    pub fn edit(day: u32, event: Event) -> Self {
        EventEditor {
            day,
            time: event.time.clone(),
            description: event.description.clone(),
            current: Some(event),
            error: None,
        }
    }

    pub fn title(&self) -> String {
        let verb = if self.current.is_some() { "Edit" } else { "Add" };
        format!("{} Event for Day {}", verb, self.day)
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_time(&mut self, time: impl Into<String>) {
        self.time = time.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Error text from the last rejected save.
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Validate the form. An edit keeps the original id, an add gets a
    /// fresh one. On rejection the form stays as typed and `error()` is set.
    pub fn save(&mut self) -> MonthcalResult<(u32, Event)> {
        match validate(&self.time, &self.description) {
            Ok(valid) => {
                self.error = None;
                let id = self.current.as_ref().map(|e| e.id.as_str());
                Ok((self.day, valid.into_event(id)))
            }
            Err(e) => {
                self.error = Some(INVALID_EVENT_MESSAGE);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MonthcalError;

    fn lunch() -> Event {
        Event {
            id: "1".to_string(),
            time: "12:00".to_string(),
            description: "Lunch with team".to_string(),
        }
    }

    #[test]
    fn test_titles() {
        assert_eq!(EventEditor::add(5).title(), "Add Event for Day 5");
        assert_eq!(EventEditor::edit(15, lunch()).title(), "Edit Event for Day 15");
    }

    #[test]
    fn test_edit_prefills_and_keeps_id() {
        let mut editor = EventEditor::edit(15, lunch());
        assert_eq!(editor.time(), "12:00");
        assert_eq!(editor.description(), "Lunch with team");

        editor.set_description("Lunch with client!");
        let (day, event) = editor.save().unwrap();
        assert_eq!(day, 15);
        assert_eq!(event.id, "1");
        assert_eq!(event.description, "Lunch with client");
    }

    #[test]
    fn test_add_mints_new_id() {
        let mut editor = EventEditor::add(3);
        editor.set_time("14:00");
        editor.set_description("Team Meeting!");
        let (_, event) = editor.save().unwrap();
        assert!(uuid::Uuid::parse_str(&event.id).is_ok());
        assert_eq!(event.description, "Team Meeting");
    }

    #[test]
    fn test_rejected_save_sets_error_and_recovers() {
        let mut editor = EventEditor::add(3);
        editor.set_time("25:61");
        editor.set_description("x");

        assert!(matches!(editor.save(), Err(MonthcalError::InvalidEventInput)));
        assert_eq!(editor.error(), Some("Please provide a valid time and description."));
        assert_eq!(editor.time(), "25:61");

        editor.set_time("09:00");
        assert!(editor.save().is_ok());
        assert_eq!(editor.error(), None);
    }
}
