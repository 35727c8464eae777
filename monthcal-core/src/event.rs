//! Events attached to a calendar day.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A time-stamped note on one day. The day itself is the key the event is
/// stored under, not a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    /// 24-hour `HH:MM`
    pub time: String,
    pub description: String,
}

impl Event {
    /// Mint an event with a fresh UUID v4 id.
    pub fn new(time: impl Into<String>, description: impl Into<String>) -> Self {
        Event {
            id: uuid::Uuid::new_v4().to_string(),
            time: time.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.time, self.description)
    }
}
