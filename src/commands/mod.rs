pub mod add;
pub mod day;
pub mod edit;
pub mod navigate;
pub mod show;

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context as _, Result};
use chrono::Datelike;
use monthcal_core::{EventStore, FileStorage, YearMonth, days_in_month};

use crate::config::{self, OnCorrupt};
use crate::cursor;
use crate::render::Highlights;

/// Everything a command needs, loaded once per run.
pub struct Context {
    pub store: EventStore<FileStorage>,
    pub cursor: YearMonth,
    cursor_storage: FileStorage,
}

impl Context {
    pub fn load(cfg: &config::Config, data_dir: Option<&Path>) -> Result<Self> {
        let dir = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => cfg.data_path()?,
        };
        Self::open(&dir, cfg.on_corrupt)
    }

    pub fn open(dir: &Path, on_corrupt: OnCorrupt) -> Result<Self> {
        let storage = FileStorage::new(dir);

        let store = match on_corrupt {
            OnCorrupt::Fail => EventStore::load(storage.clone()),
            OnCorrupt::Reset => EventStore::load_or_default(storage.clone()),
        }
        .with_context(|| format!("Failed to load events from {}", dir.display()))?;

        let cursor = cursor::load(&storage)?;

        Ok(Context {
            store,
            cursor,
            cursor_storage: storage,
        })
    }

    /// Move the cursor and remember it for the next run.
    pub fn set_cursor(&mut self, month: YearMonth) -> Result<()> {
        self.cursor = month;
        cursor::save(&mut self.cursor_storage, month)
    }

    /// Month a day argument refers to: `month` if given, else the cursor.
    /// Fails if `day` is not a day of that month.
    pub fn month_for_day(&self, month: Option<YearMonth>, day: u32) -> Result<YearMonth> {
        let month = month.unwrap_or(self.cursor);
        let last = days_in_month(month.year(), month.month());
        if day == 0 || day > last {
            anyhow::bail!(
                "Day {} is not in {} (valid days: 1-{})",
                day,
                month.label(),
                last
            );
        }
        Ok(month)
    }
}

/// Today's day of the month if `month` is the current month.
pub fn today_in(month: YearMonth) -> Option<u32> {
    let today = chrono::Local::now().date_naive();
    (YearMonth::containing(today) == month).then(|| today.day())
}

/// Grid highlights for `month` from its per-day event counts.
pub fn highlights(counts: &BTreeMap<u32, usize>, month: YearMonth) -> Highlights<'_> {
    Highlights {
        counts,
        today: today_in(month),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_persists_between_runs() {
        let tmp = tempfile::tempdir().unwrap();
        let november = YearMonth::new(2024, 11).unwrap();

        let mut ctx = Context::open(tmp.path(), OnCorrupt::Fail).unwrap();
        ctx.set_cursor(november).unwrap();

        let ctx = Context::open(tmp.path(), OnCorrupt::Fail).unwrap();
        assert_eq!(ctx.cursor, november);
    }

    #[test]
    fn test_month_for_day_checks_range() {
        let tmp = tempfile::tempdir().unwrap();
        let mut ctx = Context::open(tmp.path(), OnCorrupt::Fail).unwrap();
        ctx.set_cursor(YearMonth::new(2024, 11).unwrap()).unwrap();

        assert!(ctx.month_for_day(None, 30).is_ok());
        assert!(ctx.month_for_day(None, 31).is_err());
        assert!(ctx.month_for_day(None, 0).is_err());

        let december = YearMonth::new(2024, 12).unwrap();
        assert_eq!(ctx.month_for_day(Some(december), 31).unwrap(), december);
    }

    #[test]
    fn test_corrupt_policy() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("calendar-events.json"), "garbage").unwrap();

        assert!(Context::open(tmp.path(), OnCorrupt::Fail).is_err());
        let ctx = Context::open(tmp.path(), OnCorrupt::Reset).unwrap();
        assert!(ctx.store.is_empty());
    }
}
