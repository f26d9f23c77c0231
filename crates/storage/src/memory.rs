use std::{collections::HashMap, sync::Arc};

use eyre::Result;
use parking_lot::Mutex;

use crate::kv::KeyValueStore;

/// Process-local store. Clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryStore {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.items.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.items.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("k", "v1").unwrap();
        assert_eq!(other.get("k").unwrap().as_deref(), Some("v1"));
        other.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
        store.remove("k").unwrap();
        assert_eq!(other.get("k").unwrap(), None);
    }
}
