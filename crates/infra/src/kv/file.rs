use super::IKvStore;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Key-value store persisted as a single JSON object in a file.
/// A missing or corrupt file loads as an empty map, it is never fatal.
pub struct FileKvStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileKvStore {
    pub fn new(path: &Path) -> Self {
        let entries = Self::load(path);
        Self {
            path: path.to_path_buf(),
            entries: Mutex::new(entries),
        }
    }

    fn load(path: &Path) -> HashMap<String, String> {
        match std::fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|_| {
                warn!(
                    "Stored state at {:?} is not valid JSON, starting from an empty store",
                    path
                );
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        }
    }

    fn persist(&self, entries: &HashMap<String, String>) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!("Unable to create store directory {:?}: {:?}", parent, e);
                return;
            }
        }
        let raw = match serde_json::to_string(entries) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Unable to serialize store state: {:?}", e);
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, raw) {
            warn!("Unable to persist store state to {:?}: {:?}", self.path, e);
        }
    }
}

impl IKvStore for FileKvStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.lock().unwrap();
        entries.remove(key);
        self.persist(&entries);
    }

    fn clear(&self) {
        let mut entries = self.entries.lock().unwrap();
        entries.clear();
        self.persist(&entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persists_entries_across_reopens() {
        let dir = tempfile::tempdir().expect("To create tempdir");
        let path = dir.path().join("store.json");

        let store = FileKvStore::new(&path);
        store.set("focus", "true");
        drop(store);

        let store = FileKvStore::new(&path);
        assert_eq!(store.get("focus"), Some("true".to_string()));

        store.clear();
        drop(store);

        let store = FileKvStore::new(&path);
        assert_eq!(store.get("focus"), None);
    }

    #[test]
    fn corrupt_file_loads_as_empty_store() {
        let dir = tempfile::tempdir().expect("To create tempdir");
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{ not json !").unwrap();

        let store = FileKvStore::new(&path);
        assert_eq!(store.get("anything"), None);

        // And the store is usable again afterwards
        store.set("a", "1");
        assert_eq!(store.get("a"), Some("1".to_string()));
    }

    #[test]
    fn missing_file_loads_as_empty_store() {
        let dir = tempfile::tempdir().expect("To create tempdir");
        let store = FileKvStore::new(&dir.path().join("does-not-exist.json"));
        assert_eq!(store.get("anything"), None);
    }
}
