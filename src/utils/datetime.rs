//! Date and time span utilities
//!
//! This module provides calendar-aware spans ([`Period`]) alongside fixed-length
//! ones ([`TimeDelta`]), and the calculations built on them: age, countdowns and
//! working hours.

use crate::utils::date::days_in_month;
use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, TimeDelta};
use std::fmt;

/// Calendar span in years, months and days
///
/// Unlike [`TimeDelta`], a period counts calendar units, so "one month" is 28 to
/// 31 days depending on where it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Period {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl Period {
    /// Calendar span from `start` to `end`, negative if `end` is earlier.
    ///
    /// When the day-of-month difference points against the month difference, one
    /// month is borrowed: a forward span counts the remaining days from
    /// `start + months`, a backward span subtracts the length of `end`'s month.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        let mut total_months = proleptic_month(end) - proleptic_month(start);
        let mut days = end.day() as i32 - start.day() as i32;

        if total_months > 0 && days < 0 {
            total_months -= 1;
            if let Some(anchor) = start.checked_add_months(Months::new(total_months as u32)) {
                days = (end - anchor).num_days() as i32;
            }
        } else if total_months < 0 && days > 0 {
            total_months += 1;
            days -= days_in_month(end.month(), end.year()).unwrap_or(31) as i32;
        }

        Self {
            years: (total_months / 12) as i32,
            months: (total_months % 12) as i32,
            days,
        }
    }

    pub fn is_negative(&self) -> bool {
        self.years < 0 || self.months < 0 || self.days < 0
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}Y{}M{}D", self.years, self.months, self.days)
    }
}

fn proleptic_month(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

/// Whole years between `birth_date` and `today`: the number of birthdays that
/// have fully occurred
pub fn calculate_age(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    Period::between(birth_date, today).years
}

/// Fixed-length time left until `event`, negative once it has passed
pub fn time_until_event(now: NaiveDateTime, event: NaiveDateTime) -> TimeDelta {
    event - now
}

/// Hours/minutes/seconds breakdown of a [`TimeDelta`] for display
///
/// Each component truncates toward zero and carries the sign of the delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Countdown {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl From<TimeDelta> for Countdown {
    fn from(delta: TimeDelta) -> Self {
        Self {
            hours: delta.num_hours(),
            minutes: delta.num_minutes() % 60,
            seconds: delta.num_seconds() % 60,
        }
    }
}

/// Whole hours between `start` and `end` when both fall on the same date.
///
/// Spans crossing midnight are not supported and yield 0.
pub fn calculate_working_hours(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    if start.date() == end.date() {
        (end - start).num_hours()
    } else {
        log::debug!("working hours across dates {} and {} counted as 0", start.date(), end.date());
        0
    }
}
