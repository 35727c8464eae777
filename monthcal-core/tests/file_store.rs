//! Event store persistence through the file-backed slot.

use monthcal_core::store::STORAGE_KEY;
use monthcal_core::{
    EventEditor, EventStore, FileStorage, MonthcalError, Storage, YearMonth, build_cells,
};

#[test]
fn test_events_survive_reload() {
    let tmp = tempfile::tempdir().unwrap();

    let mut store = EventStore::load(FileStorage::new(tmp.path())).unwrap();
    let mut editor = EventEditor::add(15);
    editor.set_time("12:00");
    editor.set_description("Lunch with team");
    let (day, event) = editor.save().unwrap();
    store.upsert(2024, 11, day, event.clone()).unwrap();

    let reloaded = EventStore::load(FileStorage::new(tmp.path())).unwrap();
    assert_eq!(reloaded.events_for_day(2024, 11, 15), vec![event]);
}

#[test]
fn test_edit_through_editor_replaces_event() {
    let tmp = tempfile::tempdir().unwrap();
    let mut store = EventStore::load(FileStorage::new(tmp.path())).unwrap();

    let mut editor = EventEditor::add(15);
    editor.set_time("12:00");
    editor.set_description("Lunch with team");
    let (day, event) = editor.save().unwrap();
    store.upsert(2024, 11, day, event.clone()).unwrap();

    let mut editor = EventEditor::edit(15, event);
    editor.set_description("Lunch with client");
    let (day, edited) = editor.save().unwrap();
    store.upsert(2024, 11, day, edited).unwrap();

    let reloaded = EventStore::load(FileStorage::new(tmp.path())).unwrap();
    let events = reloaded.events_for_day(2024, 11, 15);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].description, "Lunch with client");
}

#[test]
fn test_rejected_save_leaves_storage_untouched() {
    let tmp = tempfile::tempdir().unwrap();
    let store = EventStore::load(FileStorage::new(tmp.path())).unwrap();

    let mut editor = EventEditor::add(1);
    editor.set_time("9:00");
    editor.set_description("Standup");
    assert!(editor.save().is_err());

    assert!(store.is_empty());
    assert_eq!(store.storage().get(STORAGE_KEY).unwrap(), None);
}

#[test]
fn test_corrupt_file_fails_load() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("calendar-events.json"), "{ oops").unwrap();

    let result = EventStore::load(FileStorage::new(tmp.path()));
    assert!(matches!(result, Err(MonthcalError::CorruptStore { .. })));

    let store = EventStore::load_or_default(FileStorage::new(tmp.path())).unwrap();
    assert!(store.is_empty());
}

#[test]
fn test_grid_badges_match_store() {
    let tmp = tempfile::tempdir().unwrap();
    let mut store = EventStore::load(FileStorage::new(tmp.path())).unwrap();

    for (time, description) in [("15:00", "Afternoon Meeting"), ("09:00", "Morning Call")] {
        let mut editor = EventEditor::add(15);
        editor.set_time(time);
        editor.set_description(description);
        let (day, event) = editor.save().unwrap();
        store.upsert(2024, 11, day, event).unwrap();
    }

    let month = YearMonth::new(2024, 11).unwrap();
    let counts = store.days_with_events(month);
    let with_events: Vec<u32> = build_cells(month)
        .filter_map(|cell| cell.day())
        .filter(|day| counts.contains_key(day))
        .collect();
    assert_eq!(with_events, [15]);
    assert_eq!(counts[&15], 2);
}
