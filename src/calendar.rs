//! Month listings, weekend counting and random dates
//!
//! A [`MonthCalendar`] describes one month and can hand out its days any number
//! of times; it holds no iteration state of its own.

use crate::error::{CalendarError, Result};
use crate::utils::date::{days_in_month, is_weekend, plus_days};
use chrono::{Month, NaiveDate};
use rand::Rng;
use std::fmt;

/// One day of a month listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_weekend: bool,
}

impl CalendarDay {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            is_weekend: is_weekend(date),
        }
    }
}

/// Every day of a single month, in ascending order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCalendar {
    first: NaiveDate,
    month: Month,
    length: u32,
}

impl MonthCalendar {
    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn month(&self) -> Month {
        self.month
    }

    /// Number of days in the month
    pub fn len(&self) -> usize {
        self.length as usize
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Fresh iterator over the month's days; each call starts from the 1st.
    pub fn days(&self) -> impl Iterator<Item = CalendarDay> + Clone {
        self.first.iter_days().take(self.len()).map(CalendarDay::new)
    }

    /// Number of Saturdays and Sundays in the month
    pub fn weekend_days(&self) -> u32 {
        self.days().filter(|day| day.is_weekend).count() as u32
    }
}

impl fmt::Display for MonthCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month.name(), self.first.format("%Y"))
    }
}

/// Build the day listing for `month` of `year`
pub fn generate_monthly_calendar(month: u32, year: i32) -> Result<MonthCalendar> {
    let length = days_in_month(month, year).ok_or_else(|| {
        log::warn!("rejected month {} for calendar of {}", month, year);
        CalendarError::InvalidMonth { month }
    })?;
    let month_enum = u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or(CalendarError::InvalidMonth { month })?;
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::DateOutOfRange { year, month, day: 1 })?;

    Ok(MonthCalendar {
        first,
        month: month_enum,
        length,
    })
}

/// Count Saturdays and Sundays in `month` of `year` by walking every day
pub fn count_weekend_days(month: u32, year: i32) -> Result<u32> {
    let calendar = generate_monthly_calendar(month, year)?;
    let weekends = calendar.weekend_days();
    log::debug!("{} has {} weekend days", calendar, weekends);
    Ok(weekends)
}

/// Uniformly pick a date in `start..=end` using `rng`
pub fn random_date_in_range(start: NaiveDate, end: NaiveDate, rng: &mut impl Rng) -> Result<NaiveDate> {
    if start > end {
        return Err(CalendarError::InvalidRange { start, end });
    }

    let span = (end - start).num_days();
    let offset = rng.random_range(0..=span);
    // offset <= span, so the sum never passes `end`
    plus_days(start, offset).ok_or(CalendarError::InvalidRange { start, end })
}
