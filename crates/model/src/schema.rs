//! Persisted forms of a record set.
//!
//! Current values are a versioned envelope. Bare arrays written by the earlier
//! layouts are still readable and are migrated into the nested activity shape:
//!
//! - v1: `{date, completed, calories, distance, time}`
//! - v2: v1 plus `note`
//! - v3 without envelope: `{date, completed, running, strength, note}`
//!
//! `null` entries in a bare array are calendar padding.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::{
    day::{DayRecord, Running, Strength},
    record_set::{Layout, RecordSet, Slot},
    variant::Variant,
};

pub const SCHEMA_VERSION: u64 = 3;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unsupported schema version: {0}")]
    UnsupportedVersion(u64),
    #[error("Malformed record set: {0}")]
    Malformed(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Envelope,
    Legacy,
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u64,
    layout: &'a Layout,
    slots: &'a [Slot],
}

#[derive(Deserialize)]
struct Envelope {
    layout: Layout,
    slots: Vec<Slot>,
}

#[derive(Deserialize)]
struct LegacyRecord {
    date: NaiveDate,
    #[serde(default, deserialize_with = "lenient_bool")]
    completed: bool,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    calories: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    distance: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    time: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    note: Option<String>,
    #[serde(default)]
    running: Option<LegacyRunning>,
    #[serde(default)]
    strength: Option<LegacyStrength>,
}

#[derive(Deserialize, Default)]
struct LegacyRunning {
    #[serde(default, deserialize_with = "lenient_opt_string")]
    distance: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    time: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    calories: Option<String>,
}

#[derive(Deserialize, Default)]
struct LegacyStrength {
    #[serde(default, deserialize_with = "lenient_opt_string")]
    calories: Option<String>,
}

impl From<LegacyRecord> for DayRecord {
    fn from(old: LegacyRecord) -> DayRecord {
        let running = match old.running {
            Some(running) => Running {
                distance: running.distance.unwrap_or_default(),
                time: running.time.unwrap_or_default(),
                calories: running.calories.unwrap_or_default(),
            },
            None => Running {
                distance: old.distance.unwrap_or_default(),
                time: old.time.unwrap_or_default(),
                calories: old.calories.unwrap_or_default(),
            },
        };
        DayRecord {
            date: old.date,
            completed: old.completed,
            running,
            strength: Strength {
                calories: old.strength.and_then(|s| s.calories).unwrap_or_default(),
            },
            note: old.note.unwrap_or_default(),
        }
    }
}

/// Text fields were sometimes written as numbers or nulls.
fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::String(s) => s == "true",
        Value::Number(n) => n.as_f64().map(|n| n != 0.0).unwrap_or(false),
        _ => false,
    })
}

pub fn encode(set: &RecordSet) -> Result<String, SchemaError> {
    Ok(serde_json::to_string(&EnvelopeRef {
        version: SCHEMA_VERSION,
        layout: &set.layout,
        slots: &set.slots,
    })?)
}

/// Decodes a stored value. Bare arrays take their layout from `variant`.
pub fn decode(raw: &str, variant: Variant) -> Result<(RecordSet, Origin), SchemaError> {
    let value: Value = serde_json::from_str(raw)?;
    let (mut set, origin) = if value.is_object() {
        let version = value
            .get("version")
            .and_then(Value::as_u64)
            .ok_or(SchemaError::Malformed("missing version"))?;
        if version != SCHEMA_VERSION {
            return Err(SchemaError::UnsupportedVersion(version));
        }
        let envelope: Envelope = serde_json::from_value(value)?;
        let set = RecordSet {
            layout: envelope.layout,
            slots: envelope.slots,
        };
        (set, Origin::Envelope)
    } else if value.is_array() {
        let legacy: Vec<Option<LegacyRecord>> = serde_json::from_value(value)?;
        (migrate(legacy, variant)?, Origin::Legacy)
    } else {
        return Err(SchemaError::Malformed("expected an object or an array"));
    };
    set.dedup_dates();
    Ok((set, origin))
}

fn migrate(legacy: Vec<Option<LegacyRecord>>, variant: Variant) -> Result<RecordSet, SchemaError> {
    let slots = legacy
        .into_iter()
        .map(|slot| slot.map(DayRecord::from))
        .collect::<Vec<_>>();

    let layout = match variant {
        Variant::Days => Layout::Days,
        Variant::Calendar => {
            let first = slots
                .iter()
                .flatten()
                .next()
                .ok_or(SchemaError::Malformed("calendar without days"))?;
            Layout::Calendar {
                month: time::first_day_of_month(first.date),
            }
        }
    };

    Ok(RecordSet { layout, slots })
}
