use std::collections::HashSet;

use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    day::DayRecord,
    field::Field,
    totals::Totals,
    variant::{Variant, DAYS_IN_LIST},
};

/// A calendar cell: `None` pads the grid before the first of the month.
pub type Slot = Option<DayRecord>;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Layout {
    Days,
    Calendar { month: NaiveDate },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RecordSet {
    pub layout: Layout,
    pub slots: Vec<Slot>,
}

impl RecordSet {
    /// Fresh set for `variant` anchored at `reference`.
    pub fn generate(variant: Variant, reference: NaiveDate) -> RecordSet {
        match variant {
            Variant::Days => RecordSet::days(reference),
            Variant::Calendar => RecordSet::month(reference),
        }
    }

    pub fn days(from: NaiveDate) -> RecordSet {
        RecordSet {
            layout: Layout::Days,
            slots: time::consecutive_days(from, DAYS_IN_LIST)
                .map(|date| Some(DayRecord::new(date)))
                .collect(),
        }
    }

    pub fn month(reference: NaiveDate) -> RecordSet {
        let first = time::first_day_of_month(reference);
        let blanks = time::leading_blanks(first) as usize;
        let days = time::days_in_month(first) as usize;

        let mut slots = Vec::with_capacity(blanks + days);
        slots.resize(blanks, None);
        slots.extend(time::consecutive_days(first, days).map(|date| Some(DayRecord::new(date))));

        RecordSet {
            layout: Layout::Calendar { month: first },
            slots,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DayRecord> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn records(&self) -> impl Iterator<Item = &DayRecord> {
        self.slots.iter().flatten()
    }

    /// Copy of the set with one field replaced. Padding slots and
    /// out-of-range indices leave the set unchanged.
    pub fn set_field(&self, index: usize, field: Field, value: impl Into<String>) -> RecordSet {
        let mut set = self.clone();
        set.apply_field(index, field, value.into());
        set
    }

    pub fn toggle_completed(&self, index: usize) -> RecordSet {
        let mut set = self.clone();
        set.apply_toggle(index);
        set
    }

    /// In-place form of [`RecordSet::set_field`]; returns whether a record was touched.
    pub fn apply_field(&mut self, index: usize, field: Field, value: String) -> bool {
        match self.slots.get_mut(index) {
            Some(Some(day)) => {
                day.set(field, value);
                true
            }
            _ => false,
        }
    }

    pub fn apply_toggle(&mut self, index: usize) -> bool {
        match self.slots.get_mut(index) {
            Some(Some(day)) => {
                day.completed = !day.completed;
                true
            }
            _ => false,
        }
    }

    pub fn aggregate(&self) -> Totals {
        Totals::new(self.records())
    }

    /// Removes records whose date already appeared earlier in the set. In a
    /// calendar the slot is blanked so later days keep their grid column.
    pub fn dedup_dates(&mut self) -> usize {
        let mut seen = HashSet::new();
        let mut dropped = 0;
        for slot in self.slots.iter_mut() {
            if !matches!(slot, Some(day) if !seen.insert(day.date)) {
                continue;
            }
            if let Some(day) = slot.take() {
                warn!("Dropping duplicate record for {}", day.date);
                dropped += 1;
            }
        }
        if self.layout == Layout::Days {
            self.slots.retain(Option::is_some);
        }
        dropped
    }
}
