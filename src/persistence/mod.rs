//! Named scalar record storage port
//!
//! The simulation core never touches a storage technology directly: best
//! records go through this get/set-by-name port. The web build writes to
//! LocalStorage; native hosts and tests use the in-memory store.

use std::collections::HashMap;

/// Get/set of named scalar records
pub trait RecordStore {
    fn get(&self, name: &str) -> Option<f64>;
    fn set(&mut self, name: &str, value: f64);
    fn remove(&mut self, name: &str);
}

/// In-memory store for native hosts and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, f64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn get(&self, name: &str) -> Option<f64> {
        self.entries.get(name).copied()
    }

    fn set(&mut self, name: &str, value: f64) {
        self.entries.insert(name.to_owned(), value);
    }

    fn remove(&mut self, name: &str) {
        self.entries.remove(name);
    }
}

/// Browser LocalStorage-backed store (WASM only).
///
/// Storage failures degrade to "no record": reads fall back to `None` with a
/// warning, writes are best-effort.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl RecordStore for LocalStorage {
    fn get(&self, name: &str) -> Option<f64> {
        let storage = Self::storage()?;
        match storage.get_item(name) {
            Ok(Some(raw)) => match raw.parse::<f64>() {
                Ok(value) => Some(value),
                Err(_) => {
                    log::warn!("record '{name}' is not numeric, ignoring");
                    None
                }
            },
            Ok(None) => None,
            Err(_) => {
                log::warn!("LocalStorage read failed for '{name}'");
                None
            }
        }
    }

    fn set(&mut self, name: &str, value: f64) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(name, &value.to_string());
        }
    }

    fn remove(&mut self, name: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("bestScore"), None);

        store.set("bestScore", 12.0);
        assert_eq!(store.get("bestScore"), Some(12.0));

        store.remove("bestScore");
        assert_eq!(store.get("bestScore"), None);
    }

    #[test]
    fn test_memory_store_overwrites() {
        let mut store = MemoryStore::new();
        store.set("bestTime", 30.0);
        store.set("bestTime", 45.0);
        assert_eq!(store.get("bestTime"), Some(45.0));
    }
}
