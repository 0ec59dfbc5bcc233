use std::fs;

use tempfile::TempDir;
use ticklist::persist::{PersistedStore, SnapshotFile};
use ticklist::todo::{TodoIntent, TodoState};

fn snapshot_in(dir: &TempDir) -> SnapshotFile {
    SnapshotFile::at(dir.path().join("state.json"))
}

#[test]
fn fresh_start_is_empty() {
    let dir = TempDir::new().unwrap();

    let store = PersistedStore::open(snapshot_in(&dir));

    assert!(!store.restored());
    assert_eq!(store.state(), &TodoState::default());
}

#[test]
fn every_dispatch_lands_on_disk() {
    let dir = TempDir::new().unwrap();
    let mut store = PersistedStore::open(snapshot_in(&dir));

    store.dispatch(TodoIntent::SetDraft { text: "Buy milk".to_string() });
    store.dispatch(TodoIntent::Add);

    let raw = fs::read_to_string(dir.path().join("state.json")).unwrap();
    let on_disk: TodoState = serde_json::from_str(&raw).unwrap();
    assert_eq!(&on_disk, store.state());
    assert_eq!(on_disk.items[0].text, "Buy milk");
}

#[test]
fn restart_restores_the_previous_state() {
    let dir = TempDir::new().unwrap();

    {
        let mut store = PersistedStore::open(snapshot_in(&dir));
        store.dispatch(TodoIntent::SetDraft { text: "a".to_string() });
        store.dispatch(TodoIntent::Add);
        store.dispatch(TodoIntent::SetDraft { text: "b".to_string() });
        store.dispatch(TodoIntent::Add);
        store.dispatch(TodoIntent::Toggle { id: 1 });
        store.dispatch(TodoIntent::SetDraft { text: "half-typed".to_string() });
    }

    let store = PersistedStore::open(snapshot_in(&dir));

    assert!(store.restored());
    let state = store.state();
    assert_eq!(state.items.len(), 2);
    assert!(state.items[0].done);
    assert_eq!(state.items[1].text, "b");
    assert_eq!(state.draft, "half-typed");
}

#[test]
fn ids_keep_growing_across_restarts() {
    let dir = TempDir::new().unwrap();

    {
        let mut store = PersistedStore::open(snapshot_in(&dir));
        store.dispatch(TodoIntent::SetDraft { text: "a".to_string() });
        store.dispatch(TodoIntent::Add);
    }

    let mut store = PersistedStore::open(snapshot_in(&dir));
    store.dispatch(TodoIntent::SetDraft { text: "b".to_string() });
    store.dispatch(TodoIntent::Add);

    assert_eq!(store.state().items[1].id, 2);
}

#[test]
fn malformed_snapshot_is_not_fatal() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("state.json"), "{ not json").unwrap();

    let mut store = PersistedStore::open(snapshot_in(&dir));

    assert!(!store.restored());
    assert_eq!(store.state(), &TodoState::default());

    // The next dispatch replaces the broken file with a valid snapshot.
    store.dispatch(TodoIntent::SetDraft { text: "recovered".to_string() });
    let raw = fs::read_to_string(dir.path().join("state.json")).unwrap();
    let on_disk: TodoState = serde_json::from_str(&raw).unwrap();
    assert_eq!(on_disk.draft, "recovered");
}

#[test]
fn unwritable_snapshot_keeps_the_session_running() {
    let dir = TempDir::new().unwrap();
    // A regular file where the parent directory should be makes every
    // write fail.
    fs::write(dir.path().join("blocked"), b"").unwrap();
    let snapshot = SnapshotFile::at(dir.path().join("blocked").join("state.json"));

    let mut store = PersistedStore::open(snapshot);
    store.dispatch(TodoIntent::SetDraft { text: "still here".to_string() });
    store.dispatch(TodoIntent::Add);

    assert_eq!(store.state().items.len(), 1);
    assert_eq!(store.state().items[0].text, "still here");
}
