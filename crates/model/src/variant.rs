use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Length of the day-list layout.
pub const DAYS_IN_LIST: usize = 30;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumString, Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Thirty consecutive days starting at the reference date.
    #[default]
    Days,
    /// One calendar month on a Monday-first week grid.
    Calendar,
}

impl Variant {
    pub fn storage_key(&self) -> &'static str {
        match self {
            Variant::Days => "treningownik-days",
            Variant::Calendar => "treningownik-calendar",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys() {
        assert_eq!(Variant::Days.storage_key(), "treningownik-days");
        assert_eq!(Variant::Calendar.storage_key(), "treningownik-calendar");
    }

    #[test]
    fn test_parse() {
        assert_eq!("calendar".parse::<Variant>().unwrap(), Variant::Calendar);
        assert_eq!("Days".parse::<Variant>().unwrap(), Variant::Days);
        assert!("week".parse::<Variant>().is_err());
        assert_eq!(Variant::Calendar.to_string(), "calendar");
    }
}
