//! In-memory storage.

use std::cell::RefCell;
use std::collections::HashMap;

use super::Storage;

/// A `HashMap`-backed [`Storage`] with no persistence across runs.
///
/// This is the fallback behavior when durable storage is unavailable, and
/// the natural backend for tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    map: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.map.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.borrow().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.map
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.map.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("theme"), None);

        storage.set("theme", "dark");
        assert_eq!(storage.get("theme").as_deref(), Some("dark"));

        storage.set("theme", "light");
        assert_eq!(storage.get("theme").as_deref(), Some("light"));

        storage.remove("theme");
        assert_eq!(storage.get("theme"), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_shared_through_rc() {
        use std::rc::Rc;

        let storage = Rc::new(MemoryStorage::new());
        let other = Rc::clone(&storage);

        Storage::set(&storage, "accent", "#4b72ff");
        assert_eq!(Storage::get(&other, "accent").as_deref(), Some("#4b72ff"));
    }
}
