//! Persistent UI preferences.
//!
//! Preferences are plain string key/value pairs. [`RedbPreferences`] keeps
//! them in a redb database inside the data directory; [`MemoryPreferences`]
//! keeps them for the lifetime of the value.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use redb::{Database, ReadableTable, TableDefinition};

use crate::error::FolioResult;

const PREFERENCES_TABLE: TableDefinition<&str, &str> = TableDefinition::new("preferences");

/// Key/value store for small persisted settings
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> FolioResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> FolioResult<()>;
}

/// Preferences stored with redb for ACID-compliant persistence
#[derive(Clone)]
pub struct RedbPreferences {
    db: Arc<RwLock<Database>>,
}

impl RedbPreferences {
    /// Open (or create) the preference database at the given path.
    ///
    /// Creates the parent directory and the preferences table if needed.
    pub fn open(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFERENCES_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }
}

impl PreferenceStore for RedbPreferences {
    fn get(&self, key: &str) -> FolioResult<Option<String>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(PREFERENCES_TABLE)?;
        let value = table.get(key)?.map(|v| v.value().to_string());
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> FolioResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

/// In-memory preferences, lost when dropped
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> FolioResult<Option<String>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> FolioResult<()> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Arc<S> {
    fn get(&self, key: &str) -> FolioResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> FolioResult<()> {
        (**self).set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn redb_roundtrip_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs").join("preferences.redb");

        {
            let prefs = RedbPreferences::open(&path).unwrap();
            assert_eq!(prefs.get("theme").unwrap(), None);
            prefs.set("theme", "light").unwrap();
        }

        let prefs = RedbPreferences::open(&path).unwrap();
        assert_eq!(prefs.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn redb_overwrites_value() {
        let dir = TempDir::new().unwrap();
        let prefs = RedbPreferences::open(dir.path().join("p.redb")).unwrap();
        prefs.set("theme", "light").unwrap();
        prefs.set("theme", "dark").unwrap();
        assert_eq!(prefs.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn memory_store() {
        let prefs = MemoryPreferences::new();
        prefs.set("k", "v").unwrap();
        assert_eq!(prefs.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(prefs.get("missing").unwrap(), None);
    }
}
