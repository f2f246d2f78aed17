//! Date utility functions

use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};
use std::cmp::Ordering;

/// Outcome of comparing two calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateOrder {
    Before,
    After,
    Equal,
}

/// Gregorian leap-year rule: every fourth year, except centuries not divisible by 400
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in the given year
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Number of days in a month, or `None` for a month outside 1..=12
pub fn days_in_month(month: u32, year: i32) -> Option<u32> {
    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => return None,
    };
    Some(days)
}

/// Saturday or Sunday
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Compare two dates by (year, month, day)
pub fn compare_dates(a: NaiveDate, b: NaiveDate) -> DateOrder {
    match a.cmp(&b) {
        Ordering::Less => DateOrder::Before,
        Ordering::Greater => DateOrder::After,
        Ordering::Equal => DateOrder::Equal,
    }
}

/// Days from `today` to January 1 of the following year.
///
/// December 31 gives 1. January 1 gives the full length of the year, since the
/// target is always next year's New Year's Day.
pub fn days_until_new_year(today: NaiveDate) -> i64 {
    i64::from(days_in_year(today.year())) - i64::from(today.ordinal()) + 1
}

/// Date `days` days after `date` (before it for negative values)
pub fn plus_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(TimeDelta::try_days(days)?)
}
