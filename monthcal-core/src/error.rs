//! Error types for monthcal.

use thiserror::Error;

/// Message shown to the user whenever an add/edit is rejected.
pub const INVALID_EVENT_MESSAGE: &str = "Please provide a valid time and description.";

/// Errors that can occur in monthcal operations.
#[derive(Error, Debug)]
pub enum MonthcalError {
    #[error("{}", INVALID_EVENT_MESSAGE)]
    InvalidEventInput,

    #[error("Invalid day key '{0}'. Expected YYYY-MM-DD")]
    InvalidDayKey(String),

    #[error("Invalid month '{0}'. Expected YYYY-MM")]
    InvalidMonth(String),

    #[error("Stored data in slot '{key}' is corrupt: {reason}")]
    CorruptStore { key: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No event with id '{id}' on {day}")]
    EventNotFound { day: String, id: String },
}

/// Result type alias for monthcal operations.
pub type MonthcalResult<T> = Result<T, MonthcalError>;
