//! Clock capability
//!
//! Operations that need "now" take a [`Clock`] instead of reading the host
//! clock directly, so tests can pin time with a [`FixedClock`].

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveTime, Offset};

/// Source of the current wall-clock instant.
pub trait Clock {
    /// Current instant, carrying the clock's local UTC offset.
    fn now(&self) -> DateTime<FixedOffset>;

    /// Current local calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Host wall clock in the host's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        let now = Local::now();
        now.with_timezone(&now.offset().fix())
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<FixedOffset>,
}

impl FixedClock {
    /// Clock that always reports `instant`
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.instant
    }
}

/// Read the current local date and time of day from `clock`.
pub fn current_date_time(clock: &impl Clock) -> (NaiveDate, NaiveTime) {
    let now = clock.now();
    (now.date_naive(), now.time())
}
