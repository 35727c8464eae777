//! Core engine for monthcal.
//!
//! - `grid` and `month` lay out a month as whole Sunday-first weeks and
//!   move between months
//! - `store` keeps events per day in a single persisted slot
//! - `validate` and `editor` gate what reaches the store

pub mod day_key;
pub mod editor;
pub mod error;
pub mod event;
pub mod grid;
pub mod month;
pub mod storage;
pub mod store;
pub mod validate;

pub use day_key::DayKey;
pub use editor::EventEditor;
pub use error::{MonthcalError, MonthcalResult};
pub use event::Event;
pub use grid::{DayCell, MonthCells, build_cells, days_in_month, first_weekday_offset};
pub use month::YearMonth;
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::EventStore;
