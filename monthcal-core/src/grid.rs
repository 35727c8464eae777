//! Month grid layout.
//!
//! A month is drawn as whole weeks, Sunday first. The grid starts with blank
//! cells up to the weekday of the 1st and ends with blank cells that pad the
//! last week to seven. Cells are always computed, never stored.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::month::YearMonth;

/// Column headers, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const DAYS_PER_WEEK: u32 = 7;

const COLUMNS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Number of days in `month` of `year` (the day before the 1st of the next month).
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let this = YearMonth::normalized(year, month as i64);
    this.next_month()
        .first_day()
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or_else(|| gregorian_days_in_month(this.year(), this.month()))
}

/// Weekday of the 1st of the month, 0 = Sunday through 6 = Saturday.
pub fn first_weekday_offset(year: i32, month: u32) -> u32 {
    let this = YearMonth::normalized(year, month as i64);
    this.first_day()
        .map(|first| first.weekday().num_days_from_sunday())
        .unwrap_or_else(|| gregorian_first_weekday(this.year(), this.month()))
}

/// Fallback for years chrono cannot represent.
fn gregorian_days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 => 29,
        2 => 28,
        _ => 31,
    }
}

/// Fallback for years chrono cannot represent (Sakamoto's method).
fn gregorian_first_weekday(year: i32, month: u32) -> u32 {
    const SHIFT: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let y = year as i64 - i64::from(month < 3);
    let days = y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
        + SHIFT[month as usize - 1]
        + 1;
    days.rem_euclid(7) as u32
}

/// One position in the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// Position in the grid, row-major from the top-left.
    pub index: u32,
    /// Day of the month this position would hold. Zero or negative for
    /// leading blanks, past the month's end for trailing blanks.
    pub day_number: i32,
    /// Whether the cell holds a real day of the month.
    pub is_valid: bool,
    /// Column of the cell.
    pub weekday: Weekday,
}

impl DayCell {
    pub fn weekday_label(&self) -> &'static str {
        WEEKDAY_LABELS[self.weekday.num_days_from_sunday() as usize]
    }

    /// Day of the month, only for valid cells.
    pub fn day(&self) -> Option<u32> {
        self.is_valid.then_some(self.day_number as u32)
    }
}

/// Lazy sequence of the cells of one month. Call [`build_cells`] again for
/// a fresh pass.
#[derive(Debug, Clone)]
pub struct MonthCells {
    month: YearMonth,
    offset: u32,
    days: u32,
    total: u32,
    next: u32,
}

/// Build the grid for `month`.
pub fn build_cells(month: YearMonth) -> MonthCells {
    let offset = first_weekday_offset(month.year(), month.month());
    let days = days_in_month(month.year(), month.month());
    let total = (days + offset).div_ceil(DAYS_PER_WEEK) * DAYS_PER_WEEK;

    MonthCells {
        month,
        offset,
        days,
        total,
        next: 0,
    }
}

impl MonthCells {
    pub fn month(&self) -> YearMonth {
        self.month
    }

    /// Total number of cells, always a multiple of seven.
    pub fn total_cells(&self) -> u32 {
        self.total
    }

    /// Remaining cells grouped into rows of seven.
    pub fn weeks(self) -> Vec<Vec<DayCell>> {
        let cells: Vec<DayCell> = self.collect();
        cells
            .chunks(DAYS_PER_WEEK as usize)
            .map(|week| week.to_vec())
            .collect()
    }

    /// Calendar date for a valid cell.
    pub fn date_of(&self, cell: &DayCell) -> Option<NaiveDate> {
        let day = cell.day()?;
        NaiveDate::from_ymd_opt(self.month.year(), self.month.month(), day)
    }

    fn cell_at(&self, index: u32) -> DayCell {
        let day_number = index as i32 - self.offset as i32 + 1;
        DayCell {
            index,
            day_number,
            is_valid: day_number >= 1 && day_number <= self.days as i32,
            weekday: COLUMNS[(index % DAYS_PER_WEEK) as usize],
        }
    }
}

impl Iterator for MonthCells {
    type Item = DayCell;

    fn next(&mut self) -> Option<DayCell> {
        if self.next >= self.total {
            return None;
        }
        let cell = self.cell_at(self.next);
        self.next += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MonthCells {}
