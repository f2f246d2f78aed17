//! Utility modules for the almanac library.
//!
//! This module holds the plain date arithmetic the rest of the crate builds on.
//!
//! # Available Utilities
//!
//! - [`date`] - Leap years, month lengths, weekends and day counting on calendar dates
//! - [`datetime`] - Calendar periods, age, countdowns and working hours
//!
//! Everything here is a pure function of its arguments; nothing reads the clock.

pub mod date;
pub mod datetime;
