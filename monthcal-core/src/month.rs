//! The (year, month) date cursor and month arithmetic.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, Month, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::MonthcalError;

/// A calendar month. `month` is always in `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Returns `None` when `month` is outside `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(YearMonth { year, month })
    }

    /// Build a month from any integer month, folding overflow and underflow
    /// into the year: month 0 is December of `year - 1`, month 13 is
    /// January of `year + 1`. Years saturate at the bounds of `i32`: past
    /// the last year the result is December of `i32::MAX`, before the first
    /// it is January of `i32::MIN`.
    pub fn normalized(year: i32, month: i64) -> Self {
        let zero_based = month.saturating_sub(1);
        let year = year as i64 + zero_based.div_euclid(12);
        match i32::try_from(year) {
            Ok(year) => YearMonth {
                year,
                month: (zero_based.rem_euclid(12) + 1) as u32,
            },
            Err(_) if year > 0 => YearMonth {
                year: i32::MAX,
                month: 12,
            },
            Err(_) => YearMonth {
                year: i32::MIN,
                month: 1,
            },
        }
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month containing today's local date.
    pub fn today() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn add_months(&self, months: i64) -> Self {
        Self::normalized(self.year, self.month as i64 + months)
    }

    pub fn next_month(&self) -> Self {
        self.add_months(1)
    }

    pub fn prev_month(&self) -> Self {
        self.add_months(-1)
    }

    /// First day of the month, or `None` outside chrono's supported years.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Long English month name followed by the year, e.g. "November 2024".
    pub fn label(&self) -> String {
        let name = Month::try_from(self.month as u8)
            .map(|m| m.name())
            .unwrap_or("Unknown");
        format!("{} {}", name, self.year)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for YearMonth {
    type Err = MonthcalError;

    /// Parse `YYYY-MM` (the month may omit its leading zero).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MonthcalError::InvalidMonth(s.to_string());
        let (year, month) = s.trim().rsplit_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        YearMonth::new(year, month).ok_or_else(invalid)
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        format!("{:04}-{:02}", value.year, value.month)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = MonthcalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
