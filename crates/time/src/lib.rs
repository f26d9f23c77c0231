pub use chrono;

use chrono::{Datelike as _, Local, Months, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let first = first_day_of_month(date);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(first)
}

pub fn days_in_month(date: NaiveDate) -> u32 {
    last_day_of_month(date).day()
}

/// Number of empty cells before the first of the month in a Monday-first week grid.
pub fn leading_blanks(date: NaiveDate) -> u32 {
    first_day_of_month(date).weekday().num_days_from_monday()
}

/// `count` consecutive days starting at `from`.
pub fn consecutive_days(from: NaiveDate, count: usize) -> impl Iterator<Item = NaiveDate> {
    from.iter_days().take(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(first_day_of_month(date(2024, 2, 17)), date(2024, 2, 1));
        assert_eq!(last_day_of_month(date(2024, 2, 17)), date(2024, 2, 29));
        assert_eq!(last_day_of_month(date(2023, 12, 5)), date(2023, 12, 31));
        assert_eq!(days_in_month(date(2023, 2, 1)), 28);
        assert_eq!(days_in_month(date(2024, 4, 30)), 30);
    }

    #[test]
    fn test_leading_blanks() {
        // 2024-01-01 is a Monday
        assert_eq!(leading_blanks(date(2024, 1, 20)), 0);
        // 2023-10-01 is a Sunday
        assert_eq!(leading_blanks(date(2023, 10, 15)), 6);
        // 2026-10-01 is a Thursday
        assert_eq!(leading_blanks(date(2026, 10, 14)), 3);
    }

    #[test]
    fn test_consecutive_days_cross_month() {
        let days = consecutive_days(date(2024, 2, 28), 3).collect::<Vec<_>>();
        assert_eq!(days, vec![date(2024, 2, 28), date(2024, 2, 29), date(2024, 3, 1)]);
    }
}
