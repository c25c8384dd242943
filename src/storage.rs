//! Local key-value persistence
//!
//! Values are JSON documents stored under string keys. The app uses a single
//! key for the pinned set, but the store itself is key-agnostic.

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub trait KvStore {
    /// Read a value; `Ok(None)` if the key is absent or the stored text is not JSON
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>>;

    fn set(&mut self, key: &str, value: &serde_json::Value) -> Result<()>;
}

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the store at `path`, creating parent directories
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open storage at {}", path.display()))?;

        let mut store = SqliteStore { conn };
        store.init_schema()?;

        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        let mut store = SqliteStore {
            conn: Connection::open_in_memory()?,
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Default location: `<data_dir>/bookmarktui/storage.db`
    pub fn default_path() -> PathBuf {
        if let Some(data_dir) = dirs::data_dir() {
            data_dir.join("bookmarktui").join("storage.db")
        } else {
            crate::utils::get_storage_fallback_path()
        }
    }

    fn init_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            ) WITHOUT ROWID;
            ",
        )?;

        Ok(())
    }

    /// Raw stored text, bypassing JSON parsing
    pub fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    pub fn set_raw(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}

impl KvStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>> {
        let Some(raw) = self.get_raw(key)? else {
            return Ok(None);
        };
        Ok(serde_json::from_str(&raw).ok())
    }

    fn set(&mut self, key: &str, value: &serde_json::Value) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.set_raw(key, &raw)
            .with_context(|| format!("Failed to persist key '{}'", key))
    }
}

/// Volatile store, used when the on-disk store cannot be opened
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, serde_json::Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &serde_json::Value) -> Result<()> {
        self.values.insert(key.to_string(), value.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sqlite_get_missing_key() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(store.get("pinnedBookmarks").unwrap().is_none());
    }

    #[test]
    fn test_sqlite_set_then_get() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.set("k", &json!([1, 2, 3])).unwrap();
        assert_eq!(store.get("k").unwrap(), Some(json!([1, 2, 3])));
    }

    #[test]
    fn test_sqlite_set_overwrites() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.set("k", &json!("first")).unwrap();
        store.set("k", &json!("second")).unwrap();
        assert_eq!(store.get("k").unwrap(), Some(json!("second")));
    }

    #[test]
    fn test_sqlite_malformed_value_reads_as_absent() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.set_raw("k", "{not json").unwrap();
        assert!(store.get("k").unwrap().is_none());
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert!(store.get("k").unwrap().is_none());
        store.set("k", &json!({"a": 1})).unwrap();
        assert_eq!(store.get("k").unwrap(), Some(json!({"a": 1})));
    }
}
