use crate::{day::DayRecord, decimal::Decimal};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Totals {
    pub distance: Decimal,
    pub time: Decimal,
    pub running_calories: Decimal,
    pub strength_calories: Decimal,
    pub completed: u32,
    pub days: u32,
}

impl Totals {
    pub fn new<'d>(days: impl Iterator<Item = &'d DayRecord>) -> Totals {
        days.fold(Totals::default(), |mut acc, day| {
            acc.distance += Decimal::parse_or_zero(&day.running.distance);
            acc.time += Decimal::parse_or_zero(&day.running.time);
            acc.running_calories += Decimal::parse_or_zero(&day.running.calories);
            acc.strength_calories += Decimal::parse_or_zero(&day.strength.calories);
            if day.completed {
                acc.completed += 1;
            }
            acc.days += 1;
            acc
        })
    }

    pub fn calories(&self) -> Decimal {
        self.running_calories + self.strength_calories
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_fold() {
        let mut a = DayRecord::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        a.completed = true;
        a.running.time = "30".to_string();
        a.running.calories = "250".to_string();
        let mut b = DayRecord::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        b.running.time = "45,5".to_string();
        b.strength.calories = "180".to_string();

        let totals = Totals::new([a, b].iter());
        assert_eq!(totals.time, Decimal::from(75.5));
        assert_eq!(totals.calories(), Decimal::int(430));
        assert_eq!(totals.completed, 1);
        assert_eq!(totals.days, 2);
    }
}
