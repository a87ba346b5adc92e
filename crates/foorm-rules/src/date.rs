//! Date comparison rules
//!
//! Accepts `YYYY-MM-DD` or the literal `today` on either side of the comparison.

use chrono::NaiveDate;

use crate::patterns::DATE_REGEX;

/// Resolves a date input, or `None` when it is neither `today` nor a valid date
pub fn parse_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    if input.contains("today") {
        return Some(today);
    }
    if !DATE_REGEX.is_match(input) {
        return None;
    }

    let mut parts = input.split('-').map(|p| p.trim());
    let year = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let day = parts.next()?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn compare(
    value: &str,
    bound: &str,
    today: NaiveDate,
    accept: impl Fn(NaiveDate, NaiveDate) -> bool,
) -> bool {
    match (parse_date(value, today), parse_date(bound, today)) {
        (Some(entered), Some(bound)) => accept(entered, bound),
        _ => false,
    }
}

pub fn greater_than_date(value: &str, bound: &str, today: NaiveDate) -> bool {
    compare(value, bound, today, |a, b| a > b)
}

pub fn less_than_date(value: &str, bound: &str, today: NaiveDate) -> bool {
    compare(value, bound, today, |a, b| a < b)
}

pub fn greater_than_or_equal_date(value: &str, bound: &str, today: NaiveDate) -> bool {
    compare(value, bound, today, |a, b| a >= b)
}

pub fn less_than_or_equal_date(value: &str, bound: &str, today: NaiveDate) -> bool {
    compare(value, bound, today, |a, b| a <= b)
}
