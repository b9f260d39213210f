//! File-backed storage.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::Storage;

/// A [`Storage`] persisting its map as a small JSON object on disk.
///
/// The whole file is read once at open time and rewritten on every change.
/// I/O and parse failures are logged at debug level and otherwise
/// swallowed: an unreadable file opens as empty, an unwritable one leaves
/// the store operating in memory.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    map: RefCell<HashMap<String, String>>,
}

impl FileStorage {
    /// Opens the store at `path`, loading existing state if readable.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let map = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(map) => map,
                Err(err) => {
                    debug!(path = %path.display(), %err, "ignoring malformed state file");
                    HashMap::new()
                }
            },
            Err(err) => {
                debug!(path = %path.display(), %err, "no readable state file, starting empty");
                HashMap::new()
            }
        };
        Self {
            path,
            map: RefCell::new(map),
        }
    }

    /// The conventional per-user location, under the platform config dir.
    ///
    /// `None` when the platform exposes no config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("duotone").join("state.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) {
        let map = self.map.borrow();
        let Ok(text) = serde_json::to_string_pretty(&*map) else {
            return;
        };
        if let Some(parent) = self.path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                debug!(path = %self.path.display(), %err, "cannot create state directory");
                return;
            }
        }
        if let Err(err) = fs::write(&self.path, text) {
            debug!(path = %self.path.display(), %err, "cannot write state file");
        }
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.map
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.flush();
    }

    fn remove(&self, key: &str) {
        let removed = self.map.borrow_mut().remove(key);
        if removed.is_some() {
            self.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let storage = FileStorage::open(&path);
        storage.set("theme", "dark");
        storage.set("accent", "#aabbcc");
        drop(storage);

        let reopened = FileStorage::open(&path);
        assert_eq!(reopened.get("theme").as_deref(), Some("dark"));
        assert_eq!(reopened.get("accent").as_deref(), Some("#aabbcc"));
    }

    #[test]
    fn test_remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let storage = FileStorage::open(&path);
        storage.set("theme", "dark");
        storage.remove("theme");
        drop(storage);

        let reopened = FileStorage::open(&path);
        assert_eq!(reopened.get("theme"), None);
    }

    #[test]
    fn test_malformed_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "not json").unwrap();

        let storage = FileStorage::open(&path);
        assert_eq!(storage.get("theme"), None);
    }

    #[test]
    fn test_creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("state.json");

        let storage = FileStorage::open(&path);
        storage.set("theme", "light");

        assert!(path.exists());
    }
}
