//! Error types for the almanac crate.

use chrono::NaiveDate;

/// Error type for all fallible calendar operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when text does not match a pattern or names an impossible date.
    #[error("cannot parse '{input}' with pattern '{pattern}': {source}")]
    Parse {
        /// The rejected text.
        input: String,
        /// The pattern it was matched against.
        pattern: String,
        /// Underlying chrono failure.
        #[source]
        source: chrono::ParseError,
    },

    /// Returned when a date pattern contains an unknown or malformed token.
    #[error("invalid date pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The rejected pattern.
        pattern: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Returned when a time zone id is not in the IANA database.
    #[error("unknown time zone '{zone}'")]
    UnknownZone {
        /// The rejected zone id.
        zone: String,
    },

    /// Returned when a date range has its start after its end.
    #[error("invalid date range: {start} is after {end}")]
    InvalidRange {
        /// Range start.
        start: NaiveDate,
        /// Range end.
        end: NaiveDate,
    },

    /// Returned when no locale data exists for a locale or language tag.
    #[error("unsupported locale '{locale}'")]
    UnsupportedLocale {
        /// The rejected tag.
        locale: String,
    },

    /// Returned when a month number is outside 1..=12.
    #[error("month must be in 1..=12, got {month}")]
    InvalidMonth {
        /// The rejected month.
        month: u32,
    },

    /// Returned when moving a date by a number of days leaves the representable range.
    #[error("{date} shifted by {days} days is out of range")]
    OffsetOutOfRange {
        /// The date being moved.
        date: NaiveDate,
        /// The requested shift in days.
        days: i64,
    },

    /// Returned when a year/month/day cannot be represented.
    #[error("date {year:04}-{month:02}-{day:02} is out of range")]
    DateOutOfRange {
        /// Year component.
        year: i32,
        /// Month component.
        month: u32,
        /// Day component.
        day: u32,
    },
}

/// Convenience alias used across the library.
pub type Result<T> = std::result::Result<T, CalendarError>;
