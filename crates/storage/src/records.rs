use std::sync::Arc;

use eyre::Result;
use log::info;
use model::variant::Variant;

use crate::kv::KeyValueStore;

/// Encoded record set of one variant, stored under the variant's key.
#[derive(Clone)]
pub struct RecordStore {
    kv: Arc<dyn KeyValueStore>,
    variant: Variant,
}

impl RecordStore {
    pub(crate) fn new(kv: Arc<dyn KeyValueStore>, variant: Variant) -> Self {
        RecordStore { kv, variant }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn key(&self) -> &'static str {
        self.variant.storage_key()
    }

    pub fn load(&self) -> Result<Option<String>> {
        self.kv.get(self.key())
    }

    pub fn save(&self, raw: &str) -> Result<()> {
        self.kv.set(self.key(), raw)?;
        info!("Saved {} ({} bytes)", self.key(), raw.len());
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        info!("Clearing {}", self.key());
        self.kv.remove(self.key())
    }
}
