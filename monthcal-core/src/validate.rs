//! Input checks applied before an event reaches the store.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{MonthcalError, MonthcalResult};
use crate::event::Event;

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("time pattern is valid"));

/// Drop everything except ASCII letters, ASCII digits and whitespace, then trim.
pub fn sanitize_description(text: &str) -> String {
    text.chars()
        .filter(|&c| c.is_ascii_alphanumeric() || is_space(c))
        .collect::<String>()
        .trim_matches(is_space)
        .to_string()
}

/// Whitespace as the browser form sees it: Unicode spaces and line
/// terminators plus the byte order mark, but not NEL (U+0085).
fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// True only for 24-hour `HH:MM`, hours 00-23 and minutes 00-59.
pub fn is_valid_time(text: &str) -> bool {
    TIME_RE.is_match(text)
}

/// Time and description that passed validation, not yet bound to an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEvent {
    pub time: String,
    pub description: String,
}

impl ValidEvent {
    /// Keep `existing_id` when editing; mint a new id otherwise.
    pub fn into_event(self, existing_id: Option<&str>) -> Event {
        match existing_id {
            Some(id) => Event {
                id: id.to_string(),
                time: self.time,
                description: self.description,
            },
            None => Event::new(self.time, self.description),
        }
    }
}

/// Accept the pair only if the time is well-formed and the sanitized
/// description is non-empty.
pub fn validate(time: &str, raw_description: &str) -> MonthcalResult<ValidEvent> {
    let description = sanitize_description(raw_description);
    if !is_valid_time(time) || description.is_empty() {
        return Err(MonthcalError::InvalidEventInput);
    }
    Ok(ValidEvent {
        time: time.to_string(),
        description,
    })
}
