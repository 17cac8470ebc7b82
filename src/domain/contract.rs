//! Quarterly futures contract symbol derivation.
//!
//! Index futures expire on the third Friday of March, June, September and
//! December (month codes H, M, U, Z). The front-month local symbol for a date
//! is the base symbol, the code of the first quarterly expiry strictly after
//! that date, and the final digit of the expiry year (e.g. `ESU6`).

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Third Friday of the given month, or `None` for an invalid year/month.
pub fn third_friday(year: i32, month: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let to_friday = (Weekday::Fri.num_days_from_monday() + 7
        - first.weekday().num_days_from_monday())
        % 7;
    first.checked_add_days(Days::new(u64::from(to_friday) + 14))
}

/// Futures month code for a quarterly expiry month.
pub fn month_code(month: u32) -> Option<char> {
    match month {
        3 => Some('H'),
        6 => Some('M'),
        9 => Some('U'),
        12 => Some('Z'),
        _ => None,
    }
}

/// First quarterly expiry strictly after `as_of`. A date on or past the
/// December expiry rolls into March of the following year.
pub fn front_quarter_expiry(as_of: NaiveDate) -> Option<NaiveDate> {
    let year = as_of.year();
    [(year, 3), (year, 6), (year, 9), (year, 12), (year + 1, 3)]
        .into_iter()
        .filter_map(|(y, m)| third_friday(y, m))
        .find(|expiry| *expiry > as_of)
}

/// Front-month local symbol for `base` as of a date, e.g. `ES` → `ESU6`.
pub fn front_month_symbol(base: &str, as_of: NaiveDate) -> Option<String> {
    let expiry = front_quarter_expiry(as_of)?;
    let code = month_code(expiry.month())?;
    Some(format!("{}{}{}", base, code, expiry.year().rem_euclid(10)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn third_friday_known_months() {
        // March 2024 starts on a Friday
        assert_eq!(third_friday(2024, 3), Some(date(2024, 3, 15)));
        assert_eq!(third_friday(2026, 9), Some(date(2026, 9, 18)));
        assert_eq!(third_friday(2026, 12), Some(date(2026, 12, 18)));
        assert_eq!(third_friday(2027, 3), Some(date(2027, 3, 19)));
    }

    #[test]
    fn third_friday_invalid_month() {
        assert_eq!(third_friday(2026, 13), None);
        assert_eq!(third_friday(2026, 0), None);
    }

    #[test]
    fn month_codes() {
        assert_eq!(month_code(3), Some('H'));
        assert_eq!(month_code(6), Some('M'));
        assert_eq!(month_code(9), Some('U'));
        assert_eq!(month_code(12), Some('Z'));
        assert_eq!(month_code(7), None);
    }

    #[test]
    fn front_month_mid_quarter() {
        assert_eq!(
            front_month_symbol("ES", date(2026, 8, 30)).unwrap(),
            "ESU6"
        );
    }

    #[test]
    fn rolls_on_expiry_day() {
        // the September 2026 expiry is the 18th; expiry day itself rolls
        assert_eq!(
            front_month_symbol("ES", date(2026, 9, 17)).unwrap(),
            "ESU6"
        );
        assert_eq!(
            front_month_symbol("ES", date(2026, 9, 18)).unwrap(),
            "ESZ6"
        );
    }

    #[test]
    fn december_rolls_to_next_year_march() {
        assert_eq!(
            front_month_symbol("ES", date(2026, 12, 20)).unwrap(),
            "ESH7"
        );
    }

    #[test]
    fn year_digit_wraps_decades() {
        assert_eq!(
            front_month_symbol("NQ", date(2030, 1, 2)).unwrap(),
            "NQH0"
        );
    }
}
