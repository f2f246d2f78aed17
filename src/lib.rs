//! almanac - calendar-date and clock-time arithmetic
//!
//! This library collects small, stateless date/time operations: comparing dates,
//! leap years, weekend counting, pattern-based parsing and formatting, time zone
//! conversion, age and countdown calculations, month listings, random dates and
//! localized names. Values are chrono types throughout; "now" and randomness are
//! passed in rather than read from globals.
//!
//! # Modules
//!
//! * [`calendar`] - Month listings, weekend counts and random dates
//! * [`clock`] - Injectable clock
//! * [`config`] - Application configuration management
//! * [`locale`] - Locale and weekday-name tables
//! * [`pattern`] - Token-based date patterns
//! * [`timing`] - Execution time measurement
//! * [`utils`] - Date arithmetic helpers
//! * [`zone`] - Time zone conversion

/// Month listings, weekend counting and random dates
pub mod calendar;

/// Clock capability and its system and fixed implementations
pub mod clock;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Error type shared by all fallible operations
pub mod error;

/// Localized month and weekday names
pub mod locale;

/// Logging setup for the binary
pub mod logger;

/// Date patterns such as `dd-MM-yyyy`
pub mod pattern;

/// Timing of arbitrary calls
pub mod timing;

/// Utility functions for date/time arithmetic
pub mod utils;

/// IANA time zone conversion
pub mod zone;

pub use calendar::{count_weekend_days, generate_monthly_calendar, random_date_in_range, CalendarDay, MonthCalendar};
pub use clock::{current_date_time, Clock, FixedClock, SystemClock};
pub use error::{CalendarError, Result};
pub use locale::{day_of_week_name, format_with_locale};
pub use pattern::{format_date, parse_date, DatePattern};
pub use timing::{measure_execution_time, Timed};
pub use utils::date::{compare_dates, days_until_new_year, is_leap_year, DateOrder};
pub use utils::datetime::{calculate_age, calculate_working_hours, time_until_event, Countdown, Period};
pub use zone::convert_time_zone;
