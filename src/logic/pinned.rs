//! Pinned set
//!
//! Ordered, id-unique list of bookmark snapshots the user chose to surface
//! above the tree. The whole list is persisted as one JSON array under
//! `PINNED_KEY` after every mutation.

use anyhow::{Context, Result};
use std::collections::HashSet;

use crate::api::BookmarkNode;
use crate::storage::KvStore;

/// Storage key holding the pinned list
pub const PINNED_KEY: &str = "pinnedBookmarks";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinnedSet {
    entries: Vec<BookmarkNode>,
}

impl PinnedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a persisted value
    ///
    /// Anything other than an array of nodes yields an empty set. Entries
    /// repeating an earlier id are dropped.
    pub fn from_json(value: Option<serde_json::Value>) -> Self {
        let Some(value) = value else {
            return Self::new();
        };

        let Ok(nodes) = serde_json::from_value::<Vec<BookmarkNode>>(value) else {
            return Self::new();
        };

        let mut seen = HashSet::new();
        let entries = nodes
            .into_iter()
            .filter(|node| seen.insert(node.id.clone()))
            .collect();

        Self { entries }
    }

    /// Load from the store
    ///
    /// Absent or malformed data is an empty set; a failed read is an error so
    /// the caller never overwrites a list it could not see.
    pub fn load(store: &dyn KvStore) -> Result<Self> {
        let value = store
            .get(PINNED_KEY)
            .context("Failed to read pinned bookmarks")?;
        Ok(Self::from_json(value))
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.entries).unwrap_or_else(|_| serde_json::Value::Array(Vec::new()))
    }

    pub fn persist(&self, store: &mut dyn KvStore) -> Result<()> {
        store.set(PINNED_KEY, &self.to_json())
    }

    /// Append a snapshot; returns false (and changes nothing) if the id is already pinned
    pub fn pin(&mut self, node: BookmarkNode) -> bool {
        if self.contains(&node.id) {
            return false;
        }
        self.entries.push(node);
        true
    }

    /// Remove the entry with this id; returns false if nothing was pinned under it
    pub fn unpin(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|node| node.id != id);
        self.entries.len() != before
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|node| node.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&BookmarkNode> {
        self.entries.iter().find(|node| node.id == id)
    }

    pub fn entries(&self) -> &[BookmarkNode] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use serde_json::json;

    #[test]
    fn test_absent_value_is_empty() {
        assert!(PinnedSet::from_json(None).is_empty());
    }

    #[test]
    fn test_wrong_shape_is_empty() {
        assert!(PinnedSet::from_json(Some(json!({"id": "1"}))).is_empty());
        assert!(PinnedSet::from_json(Some(json!("pinned"))).is_empty());
        assert!(PinnedSet::from_json(Some(json!([{"title": "no id"}]))).is_empty());
    }

    #[test]
    fn test_load_drops_duplicate_ids() {
        let value = json!([
            {"id": "1", "title": "A", "url": "http://a"},
            {"id": "1", "title": "A again", "url": "http://a2"},
            {"id": "2", "title": "B", "url": "http://b"}
        ]);
        let set = PinnedSet::from_json(Some(value));
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("1").unwrap().title, "A");
    }

    #[test]
    fn test_pin_appends_in_order() {
        let mut set = PinnedSet::new();
        assert!(set.pin(BookmarkNode::bookmark("2", "B", "http://b")));
        assert!(set.pin(BookmarkNode::bookmark("1", "A", "http://a")));
        let ids: Vec<&str> = set.entries().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_pin_duplicate_is_noop() {
        let mut set = PinnedSet::new();
        set.pin(BookmarkNode::bookmark("1", "A", "http://a"));
        let before = set.clone();
        assert!(!set.pin(BookmarkNode::bookmark("1", "Renamed", "http://other")));
        assert_eq!(set, before);
    }

    #[test]
    fn test_unpin_missing_is_noop() {
        let mut set = PinnedSet::new();
        set.pin(BookmarkNode::bookmark("1", "A", "http://a"));
        assert!(!set.unpin("9"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_persist_roundtrip_through_store() {
        let mut store = MemoryStore::new();
        let mut set = PinnedSet::new();
        set.pin(BookmarkNode::bookmark("1", "A", "http://a"));
        set.persist(&mut store).unwrap();

        let loaded = PinnedSet::load(&store).unwrap();
        assert_eq!(loaded, set);
    }

    struct LockedStore;

    impl KvStore for LockedStore {
        fn get(&self, _key: &str) -> Result<Option<serde_json::Value>> {
            anyhow::bail!("database is locked")
        }

        fn set(&mut self, _key: &str, _value: &serde_json::Value) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_read_failure_is_an_error_not_an_empty_set() {
        let err = PinnedSet::load(&LockedStore).unwrap_err();
        assert_eq!(crate::logic::errors::format_error_message(&err), "database is locked");
    }
}
