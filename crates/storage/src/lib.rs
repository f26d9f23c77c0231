pub mod file;
pub mod kv;
pub mod memory;
pub mod records;

use std::sync::Arc;

use file::FileStore;
use kv::KeyValueStore;
use model::variant::Variant;
use records::RecordStore;

#[derive(Clone)]
pub struct Storage {
    kv: Arc<dyn KeyValueStore>,
}

impl Storage {
    pub fn new(kv: impl KeyValueStore + 'static) -> Self {
        Storage { kv: Arc::new(kv) }
    }

    pub fn file(dir: impl Into<std::path::PathBuf>) -> Self {
        Storage::new(FileStore::new(dir))
    }

    pub fn records(&self, variant: Variant) -> RecordStore {
        RecordStore::new(self.kv.clone(), variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    #[test]
    fn test_variants_use_separate_keys() {
        let kv = MemoryStore::new();
        let storage = Storage::new(kv.clone());
        storage.records(Variant::Days).save("days").unwrap();
        storage.records(Variant::Calendar).save("calendar").unwrap();

        assert_eq!(kv.get("treningownik-days").unwrap().as_deref(), Some("days"));
        assert_eq!(
            kv.get("treningownik-calendar").unwrap().as_deref(),
            Some("calendar")
        );

        storage.records(Variant::Days).clear().unwrap();
        assert_eq!(storage.records(Variant::Days).load().unwrap(), None);
        assert!(storage.records(Variant::Calendar).load().unwrap().is_some());
    }
}
