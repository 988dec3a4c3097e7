use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::Result;

/// Local string key-value storage.
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if nothing was ever written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Stores each key as `<key>.json` inside a data directory.
///
/// The directory is created on first write.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// In-memory storage; contents vanish with the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Load and decode the JSON blob under `key`.
///
/// Missing data, read failures and decode failures all yield `None`; the
/// latter two are logged.
pub fn load_json<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let content = match store.get(key) {
        Ok(Some(content)) => content,
        Ok(None) => {
            debug!(key, "no stored data");
            return None;
        }
        Err(e) => {
            warn!(key, error = %e, "failed to read stored data");
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(value) => {
            debug!(key, "loaded stored data");
            Some(value)
        }
        Err(e) => {
            warn!(key, error = %e, "failed to decode stored data");
            None
        }
    }
}

/// Encode `value` as JSON and write it under `key`.
///
/// Failures are logged and swallowed; returns whether the write succeeded.
pub fn save_json<T, S>(store: &mut S, key: &str, value: &T) -> bool
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let json = match serde_json::to_string_pretty(value) {
        Ok(json) => json,
        Err(e) => {
            warn!(key, error = %e, "failed to encode data");
            return false;
        }
    };

    match store.set(key, &json) {
        Ok(()) => {
            debug!(key, bytes = json.len(), "saved data");
            true
        }
        Err(e) => {
            warn!(key, error = %e, "failed to save data");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MacroGoal;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("nested"));

        assert_eq!(store.get("macroGoals").unwrap(), None);

        store.set("macroGoals", "{}").unwrap();
        assert_eq!(store.get("macroGoals").unwrap().as_deref(), Some("{}"));
        assert!(dir.path().join("nested").join("macroGoals.json").exists());
    }

    #[test]
    fn test_load_json_missing_is_none() {
        let store = MemoryStore::new();
        let loaded: Option<MacroGoal> = load_json(&store, "macroGoals");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_json_corrupt_is_none() {
        let mut store = MemoryStore::new();
        store.set("macroGoals", "not json at all").unwrap();

        let loaded: Option<MacroGoal> = load_json(&store, "macroGoals");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let goal = MacroGoal::new(140.0, 220.0, 65.0);

        assert!(save_json(&mut store, "macroGoals", &goal));
        let loaded: Option<MacroGoal> = load_json(&store, "macroGoals");
        assert_eq!(loaded, Some(goal));
    }

    #[test]
    fn test_save_failure_is_reported_not_raised() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "file, not a directory").unwrap();

        let mut store = JsonFileStore::new(&blocker);
        assert!(!save_json(&mut store, "macroGoals", &MacroGoal::default()));
    }
}
