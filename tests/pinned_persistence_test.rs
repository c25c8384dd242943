//! Tests for pinned bookmark persistence
//!
//! The pinned set lives under a single key as a JSON array of node
//! snapshots. After every mutation the stored value must equal the
//! in-memory set, and malformed stored data loads as an empty set.

use bookmarktui::api::BookmarkNode;
use bookmarktui::logic::pinned::{PinnedSet, PINNED_KEY};
use bookmarktui::storage::{KvStore, SqliteStore};

fn api() -> BookmarkNode {
    BookmarkNode::bookmark("1", "API", "http://a")
}

fn home() -> BookmarkNode {
    BookmarkNode::bookmark("2", "Home", "http://h")
}

/// Test: persisted value equals the in-memory set after each mutation
#[test]
fn test_persisted_value_tracks_every_mutation() {
    let mut store = SqliteStore::open_in_memory().expect("Failed to open store");
    let mut pinned = PinnedSet::load(&store).unwrap();
    assert!(pinned.is_empty());

    assert!(pinned.pin(api()));
    pinned.persist(&mut store).unwrap();
    assert_eq!(store.get(PINNED_KEY).unwrap(), Some(pinned.to_json()));

    assert!(pinned.pin(home()));
    pinned.persist(&mut store).unwrap();
    assert_eq!(PinnedSet::load(&store).unwrap(), pinned);

    assert!(pinned.unpin("1"));
    pinned.persist(&mut store).unwrap();
    assert_eq!(PinnedSet::load(&store).unwrap(), pinned);
    assert_eq!(pinned.len(), 1);
}

/// Test: pin then unpin of the same id restores the prior set
#[test]
fn test_pin_unpin_round_trip() {
    let mut pinned = PinnedSet::new();
    pinned.pin(api());
    let before = pinned.clone();

    pinned.pin(home());
    pinned.unpin("2");
    assert_eq!(pinned, before);
}

/// Test: pinning an id that is already pinned changes nothing
#[test]
fn test_duplicate_pin_is_noop() {
    let mut pinned = PinnedSet::new();
    assert!(pinned.pin(api()));
    let renamed = BookmarkNode::bookmark("1", "Renamed", "http://other");
    assert!(!pinned.pin(renamed));
    assert_eq!(pinned.len(), 1);
    assert_eq!(pinned.get("1").unwrap().title, "API");
}

/// Test: the set survives reopening an on-disk store
#[test]
fn test_pins_survive_reopen() {
    let path = std::env::temp_dir().join(format!(
        "bookmarktui-pins-{}-{}.db",
        std::process::id(),
        chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
    ));

    {
        let mut store = SqliteStore::open(&path).expect("Failed to open store");
        let mut pinned = PinnedSet::new();
        pinned.pin(home());
        pinned.persist(&mut store).unwrap();
    }

    let store = SqliteStore::open(&path).expect("Failed to reopen store");
    let pinned = PinnedSet::load(&store).unwrap();
    assert_eq!(pinned.entries(), &[home()]);

    drop(store);
    let _ = std::fs::remove_file(&path);
}

/// Test: malformed stored data loads as an empty set
#[test]
fn test_malformed_data_loads_empty() {
    let mut store = SqliteStore::open_in_memory().unwrap();

    store.set_raw(PINNED_KEY, "not json").unwrap();
    assert!(PinnedSet::load(&store).unwrap().is_empty());

    store.set(PINNED_KEY, &serde_json::json!({"id": "1"})).unwrap();
    assert!(PinnedSet::load(&store).unwrap().is_empty());

    store
        .set(PINNED_KEY, &serde_json::json!([{"id": "1", "title": "x"}]))
        .unwrap();
    assert!(PinnedSet::load(&store).unwrap().is_empty());
}
