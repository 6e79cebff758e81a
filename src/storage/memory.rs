//! In-memory key-value store for session-scoped state.

use anyhow::Result;
use std::cell::RefCell;
use std::collections::HashMap;

use super::KeyValueStore;

/// Key-value store that forgets everything when dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(store.get("other").unwrap(), None);
    }

    #[test]
    fn test_new_store_is_empty() {
        let first = MemoryStore::new();
        first.set("lastViewedQuote", "{}").unwrap();

        let second = MemoryStore::new();
        assert_eq!(second.get("lastViewedQuote").unwrap(), None);
    }
}
