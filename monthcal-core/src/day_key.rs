//! Keys identifying one calendar day in the event store.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::MonthcalError;

/// A calendar day, written as `YYYY-MM-DD`.
///
/// Every lookup and every write builds its key through [`DayKey::new`], so
/// the text form can only ever come from one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct DayKey {
    year: i32,
    month: u32,
    day: u32,
}

impl DayKey {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        DayKey { year, month, day }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        use chrono::Datelike;
        DayKey::new(date.year(), date.month(), date.day())
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for DayKey {
    type Err = MonthcalError;

    /// Accepts the canonical padded form and the unpadded `2024-1-5` form
    /// older data was written with. Both must name a real date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MonthcalError::InvalidDayKey(s.to_string());

        let mut parts = s.rsplitn(3, '-');
        let day = parts.next().ok_or_else(invalid)?;
        let month = parts.next().ok_or_else(invalid)?;
        let year = parts.next().ok_or_else(invalid)?;

        let day: u32 = day.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        let year: i32 = year.parse().map_err(|_| invalid())?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(DayKey::from_date)
            .ok_or_else(invalid)
    }
}

impl From<DayKey> for String {
    fn from(key: DayKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for DayKey {
    type Error = MonthcalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
