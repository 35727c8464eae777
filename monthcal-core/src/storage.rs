//! Named key-value slots that hold persisted state.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::MonthcalResult;

/// A string-valued key-value store. Each write replaces the whole value.
pub trait Storage {
    /// Value stored under `key`, or `None` if the slot was never written.
    fn get(&self, key: &str) -> MonthcalResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> MonthcalResult<()>;
}

/// In-process slots, for tests and embedding.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot without going through a store.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.slots.insert(key.to_string(), value.to_string());
        self
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> MonthcalResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> MonthcalResult<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per slot inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> MonthcalResult<Option<String>> {
        let path = self.slot_path(key);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "slot absent");
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "slot read");
        Ok(Some(content))
    }

    fn set(&mut self, key: &str, value: &str) -> MonthcalResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let path = self.slot_path(key);
        let temp = self.dir.join(format!("{}.json.tmp", key));

        // Write then rename so a crash never leaves a half-written slot
        std::fs::write(&temp, value)?;
        std::fs::rename(&temp, &path)?;
        tracing::debug!(path = %path.display(), bytes = value.len(), "slot written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("a").unwrap(), None);
        storage.set("a", "1").unwrap();
        storage.set("a", "2").unwrap();
        assert_eq!(storage.get("a").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_file_storage_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(tmp.path().join("nested"));

        assert_eq!(storage.get("calendar-events").unwrap(), None);
        storage.set("calendar-events", "{}").unwrap();
        assert_eq!(storage.get("calendar-events").unwrap().as_deref(), Some("{}"));
        assert!(tmp.path().join("nested/calendar-events.json").exists());
        assert!(!tmp.path().join("nested/calendar-events.json.tmp").exists());
    }
}
