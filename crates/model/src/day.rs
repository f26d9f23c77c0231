use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    decimal::Decimal,
    field::{Field, RunningField, StrengthField},
};

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Running {
    #[serde(default)]
    pub distance: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub calories: String,
}

impl Running {
    pub fn is_empty(&self) -> bool {
        self.distance.is_empty() && self.time.is_empty() && self.calories.is_empty()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Strength {
    #[serde(default)]
    pub calories: String,
}

impl Strength {
    pub fn is_empty(&self) -> bool {
        self.calories.is_empty()
    }
}

/// One calendar day of tracked activity.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DayRecord {
    pub date: NaiveDate,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub running: Running,
    #[serde(default)]
    pub strength: Strength,
    #[serde(default)]
    pub note: String,
}

impl DayRecord {
    pub fn new(date: NaiveDate) -> DayRecord {
        DayRecord {
            date,
            completed: false,
            running: Running::default(),
            strength: Strength::default(),
            note: String::new(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Running(RunningField::Distance) => &self.running.distance,
            Field::Running(RunningField::Time) => &self.running.time,
            Field::Running(RunningField::Calories) => &self.running.calories,
            Field::Strength(StrengthField::Calories) => &self.strength.calories,
            Field::Note => &self.note,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Running(RunningField::Distance) => &mut self.running.distance,
            Field::Running(RunningField::Time) => &mut self.running.time,
            Field::Running(RunningField::Calories) => &mut self.running.calories,
            Field::Strength(StrengthField::Calories) => &mut self.strength.calories,
            Field::Note => &mut self.note,
        };
        *slot = value;
    }

    /// Running and strength calories combined, `None` when neither was filled in.
    pub fn total_calories(&self) -> Option<Decimal> {
        if self.running.calories.is_empty() && self.strength.calories.is_empty() {
            return None;
        }
        Some(
            Decimal::parse_or_zero(&self.running.calories)
                + Decimal::parse_or_zero(&self.strength.calories),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> DayRecord {
        DayRecord::new(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
    }

    #[test]
    fn test_new_is_blank() {
        let day = day();
        assert!(!day.completed);
        assert!(day.running.is_empty());
        assert!(day.strength.is_empty());
        assert!(day.note.is_empty());
    }

    #[test]
    fn test_set_and_get_every_field() {
        let mut day = day();
        for (i, field) in Field::all().into_iter().enumerate() {
            day.set(field, format!("v{}", i));
        }
        for (i, field) in Field::all().into_iter().enumerate() {
            assert_eq!(day.get(field), format!("v{}", i));
        }
    }

    #[test]
    fn test_total_calories() {
        let mut day = day();
        assert_eq!(day.total_calories(), None);
        day.set(Field::Strength(StrengthField::Calories), "120".to_string());
        assert_eq!(day.total_calories(), Some(Decimal::int(120)));
        day.set(Field::Running(RunningField::Calories), "x".to_string());
        assert_eq!(day.total_calories(), Some(Decimal::int(120)));
        day.set(Field::Running(RunningField::Calories), "300.5".to_string());
        assert_eq!(day.total_calories(), Some(Decimal::from(420.5)));
    }

    #[test]
    fn test_serialized_date_is_iso() {
        let json = serde_json::to_value(day()).unwrap();
        assert_eq!(json["date"], "2024-05-01");
        assert_eq!(json["running"]["distance"], "");
    }
}
