//! Age derivation from the birth date field.
//!
//! Dates arrive as `YYYY-MM-DD` strings from the UI's date input. The
//! reference "today" is always passed in by the caller, so results stay
//! deterministic.

use chrono::{Datelike, NaiveDate};

use crate::error::MalformedDateError;

/// Pure calendar arithmetic for the registration form.
pub struct AgeCalculator;

impl AgeCalculator {
    /// Whole-years age at `today` for someone born on `birth_date`.
    ///
    /// The year difference is decremented by one when the birthday has not
    /// been reached yet this year. A birth date in the future yields a
    /// negative result; whether to reject that is the caller's decision.
    pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
        let mut age = today.year() - birth_date.year();
        if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
            age -= 1;
        }
        age
    }

    /// Parse a `YYYY-MM-DD` value from the birth date input.
    pub fn parse_birth_date(raw: &str) -> Result<NaiveDate, MalformedDateError> {
        NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| MalformedDateError {
            raw: raw.to_string(),
        })
    }

    /// Age as the rule engine sees it: `None` when the birth date is absent
    /// or malformed, so that age-dependent rules stay inactive.
    pub fn derive(raw: &str, today: NaiveDate) -> Option<i32> {
        Self::parse_birth_date(raw)
            .ok()
            .map(|birth_date| Self::age_on(birth_date, today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_birthday_already_reached_this_year() {
        assert_eq!(AgeCalculator::age_on(date(2000, 1, 1), date(2024, 1, 1)), 24);
    }

    #[test]
    fn test_birthday_not_yet_reached_this_year() {
        assert_eq!(AgeCalculator::age_on(date(2000, 6, 15), date(2024, 1, 1)), 23);
    }

    #[test]
    fn test_birthday_today_counts_as_reached() {
        assert_eq!(AgeCalculator::age_on(date(2006, 6, 15), date(2024, 6, 15)), 18);
    }

    #[test]
    fn test_day_before_birthday() {
        assert_eq!(AgeCalculator::age_on(date(2006, 6, 15), date(2024, 6, 14)), 17);
    }

    #[test]
    fn test_leap_day_birthday() {
        let birth = date(2004, 2, 29);
        assert_eq!(AgeCalculator::age_on(birth, date(2023, 2, 28)), 18);
        assert_eq!(AgeCalculator::age_on(birth, date(2023, 3, 1)), 19);
    }

    #[test]
    fn test_future_birth_date_is_negative() {
        assert_eq!(AgeCalculator::age_on(date(2030, 1, 1), date(2024, 6, 1)), -6);
    }

    #[test]
    fn test_parse_accepts_date_input_format() {
        assert_eq!(
            AgeCalculator::parse_birth_date("2000-06-15"),
            Ok(date(2000, 6, 15))
        );
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert!(AgeCalculator::parse_birth_date("2000-13-01").is_err());
        assert!(AgeCalculator::parse_birth_date("2001-02-29").is_err());
    }

    #[test]
    fn test_parse_rejects_garbage_and_empty() {
        assert!(AgeCalculator::parse_birth_date("abc").is_err());
        assert!(AgeCalculator::parse_birth_date("").is_err());
        assert!(AgeCalculator::parse_birth_date("15/06/2000").is_err());
    }

    #[test]
    fn test_derive_degrades_to_unknown() {
        let today = date(2024, 6, 1);
        assert_eq!(AgeCalculator::derive("", today), None);
        assert_eq!(AgeCalculator::derive("not-a-date", today), None);
        assert_eq!(AgeCalculator::derive("2006-01-01", today), Some(18));
    }
}
