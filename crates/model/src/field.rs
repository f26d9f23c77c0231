use std::{fmt::Display, str::FromStr};

use strum::{EnumIter, EnumString, IntoEnumIterator as _, IntoStaticStr};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum RunningField {
    Distance,
    Time,
    Calories,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum StrengthField {
    Calories,
}

/// Addressable free-text field of a day record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Running(RunningField),
    Strength(StrengthField),
    Note,
}

impl Field {
    pub fn all() -> Vec<Field> {
        RunningField::iter()
            .map(Field::Running)
            .chain(StrengthField::iter().map(Field::Strength))
            .chain(std::iter::once(Field::Note))
            .collect()
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Running(field) => write!(f, "running.{}", <&str>::from(field)),
            Field::Strength(field) => write!(f, "strength.{}", <&str>::from(field)),
            Field::Note => write!(f, "note"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown field: {0}")]
pub struct ParseFieldError(pub String);

impl FromStr for Field {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseFieldError(s.to_string());
        match s.split_once('.') {
            Some(("running", field)) => RunningField::from_str(field)
                .map(Field::Running)
                .map_err(|_| err()),
            Some(("strength", field)) => StrengthField::from_str(field)
                .map(Field::Strength)
                .map_err(|_| err()),
            Some(_) => Err(err()),
            None if s == "note" => Ok(Field::Note),
            // flat names of the single-activity layout
            None => RunningField::from_str(s)
                .map(Field::Running)
                .map_err(|_| err()),
        }
    }
}
