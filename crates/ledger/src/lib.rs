use eyre::Result;
use model::{record_set::RecordSet, variant::Variant};
use service::days::Days;
use storage::Storage;

pub mod service;

#[derive(Clone)]
pub struct Ledger {
    pub days: Days,
}

impl Ledger {
    pub fn new(storage: Storage, variant: Variant) -> Self {
        let days = Days::new(storage.records(variant));
        Ledger { days }
    }

    pub fn export_csv(&self, set: &RecordSet) -> Result<String> {
        service::export::render_csv(set)
    }
}
