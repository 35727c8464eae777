//! The month the calendar is showing, kept between runs.

use anyhow::{Context, Result};
use monthcal_core::{Storage, YearMonth};

const CURSOR_KEY: &str = "calendar-cursor";

/// Stored cursor, or the current month if none was saved or it is unreadable.
pub fn load(storage: &impl Storage) -> Result<YearMonth> {
    let Some(raw) = storage.get(CURSOR_KEY)? else {
        return Ok(YearMonth::today());
    };

    match serde_json::from_str(&raw) {
        Ok(month) => Ok(month),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable cursor");
            Ok(YearMonth::today())
        }
    }
}

pub fn save(storage: &mut impl Storage, month: YearMonth) -> Result<()> {
    let content = serde_json::to_string(&month).context("Failed to serialize cursor")?;
    storage.set(CURSOR_KEY, &content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use monthcal_core::MemoryStorage;

    #[test]
    fn test_defaults_to_today() {
        let storage = MemoryStorage::new();
        assert_eq!(load(&storage).unwrap(), YearMonth::today());
    }

    #[test]
    fn test_round_trip() {
        let mut storage = MemoryStorage::new();
        let november = YearMonth::new(2024, 11).unwrap();
        save(&mut storage, november).unwrap();
        assert_eq!(load(&storage).unwrap(), november);
    }

    #[test]
    fn test_unreadable_cursor_falls_back() {
        let storage = MemoryStorage::new().with(CURSOR_KEY, "\"2024-14\"");
        assert_eq!(load(&storage).unwrap(), YearMonth::today());
    }
}
