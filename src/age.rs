//! Derived Age Calculator
//!
//! Age is never stored; it is derived from the birth date and feeds the
//! experience validation.

use chrono::NaiveDate;

/// Full years elapsed between `birth` and `on`. `None` when `birth` is
/// after `on`; callers reject future birth dates before asking.
pub fn full_years(birth: NaiveDate, on: NaiveDate) -> Option<u32> {
    on.years_since(birth)
}

/// Age on the given date, or `None` when the birth date is missing or
/// in the future.
pub fn derive_age(birth: Option<NaiveDate>, on: NaiveDate) -> Option<u32> {
    birth.and_then(|b| full_years(b, on))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_full_years_reference_scenario() {
        assert_eq!(full_years(d(1990, 1, 1), d(2024, 6, 1)), Some(34));
    }

    #[test]
    fn test_birthday_not_yet_reached() {
        assert_eq!(full_years(d(1990, 7, 1), d(2024, 6, 30)), Some(33));
        assert_eq!(full_years(d(1990, 7, 1), d(2024, 7, 1)), Some(34));
    }

    #[test]
    fn test_future_birth_date_has_no_age() {
        assert_eq!(full_years(d(2030, 1, 1), d(2024, 6, 1)), None);
        assert_eq!(derive_age(Some(d(2030, 1, 1)), d(2024, 6, 1)), None);
    }

    #[test]
    fn test_missing_birth_date() {
        assert_eq!(derive_age(None, d(2024, 6, 1)), None);
    }

    #[test]
    fn test_leap_day_birth() {
        assert_eq!(full_years(d(2000, 2, 29), d(2024, 2, 28)), Some(23));
        assert_eq!(full_years(d(2000, 2, 29), d(2024, 3, 1)), Some(24));
    }
}
