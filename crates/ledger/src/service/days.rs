use chrono::NaiveDate;
use eyre::{Context as _, Result};
use log::{debug, info, warn};
use model::{
    field::Field,
    record_set::RecordSet,
    schema::{self, Origin},
    totals::Totals,
    variant::Variant,
};
use storage::records::RecordStore;

/// Day-record store for one variant: load or generate, mutate, re-persist.
#[derive(Clone)]
pub struct Days {
    records: RecordStore,
}

impl Days {
    pub(crate) fn new(records: RecordStore) -> Self {
        Days { records }
    }

    pub fn variant(&self) -> Variant {
        self.records.variant()
    }

    /// Saved set if there is a readable one, otherwise a fresh set anchored at `reference`.
    pub fn initialize(&self, reference: NaiveDate) -> Result<RecordSet> {
        let variant = self.variant();
        let raw = self
            .records
            .load()
            .with_context(|| format!("Failed to load {}", variant.storage_key()))?;

        if let Some(raw) = raw {
            match schema::decode(&raw, variant) {
                Ok((set, origin)) => {
                    if origin == Origin::Legacy {
                        info!("Migrated legacy {} data ({} slots)", variant, set.len());
                    } else {
                        info!("Loaded {} ({} slots)", variant, set.len());
                    }
                    return Ok(set);
                }
                Err(err) => {
                    warn!("Ignoring stored {} data: {}", variant, err);
                }
            }
        }

        info!("Generating {} starting {}", variant, reference);
        Ok(RecordSet::generate(variant, reference))
    }

    pub fn persist(&self, set: &RecordSet) -> Result<()> {
        let raw = schema::encode(set).context("Failed to encode record set")?;
        self.records.save(&raw)
    }

    pub fn set_field(
        &self,
        set: &RecordSet,
        index: usize,
        field: Field,
        value: impl Into<String>,
    ) -> RecordSet {
        set.set_field(index, field, value)
    }

    pub fn toggle_completed(&self, set: &RecordSet, index: usize) -> RecordSet {
        set.toggle_completed(index)
    }

    pub fn aggregate(&self, set: &RecordSet) -> Totals {
        set.aggregate()
    }

    /// Replaces one field and persists the whole set. Returns `false` without
    /// writing when `index` is padding or out of range.
    pub fn update_field(
        &self,
        set: &mut RecordSet,
        index: usize,
        field: Field,
        value: impl Into<String>,
    ) -> Result<bool> {
        if !set.apply_field(index, field, value.into()) {
            debug!("No record at {} for {}", index, field);
            return Ok(false);
        }
        debug!("Set {} of record {}", field, index);
        self.persist(set)?;
        Ok(true)
    }

    pub fn toggle(&self, set: &mut RecordSet, index: usize) -> Result<bool> {
        if !set.apply_toggle(index) {
            debug!("No record at {} to toggle", index);
            return Ok(false);
        }
        debug!("Toggled record {}", index);
        self.persist(set)?;
        Ok(true)
    }
}
