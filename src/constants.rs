//! Constants used throughout the application
//!
//! This module centralizes default values and the demonstration's output text
//! so the driver in `main.rs` stays free of literals.

// Display defaults
pub const DEFAULT_INPUT_PATTERN: &str = "dd-MM-yyyy";
pub const DEFAULT_OUTPUT_PATTERN: &str = "yyyy/MM/dd";
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";
pub const DEFAULT_LOCALE: &str = "en";
pub const DEFAULT_WEEKDAY_LANGUAGE: &str = "ru";
pub const DEFAULT_SOURCE_ZONE: &str = "UTC";
pub const DEFAULT_TARGET_ZONE: &str = "Europe/Moscow";

// Logging defaults
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Timestamp layout of log lines
pub const LOG_TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";

// Config file lookup
pub const CONFIG_FILE_NAME: &str = "almanac.toml";
pub const CONFIG_DIR_NAME: &str = "almanac";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// Demonstration output
pub const MSG_CURRENT_DATE_TIME: &str = "Текущая дата и время:";
pub const MSG_FIRST_BEFORE_SECOND: &str = "Первая дата раньше второй.";
pub const MSG_FIRST_AFTER_SECOND: &str = "Первая дата позже второй.";
pub const MSG_DATES_EQUAL: &str = "Даты равны.";
pub const MSG_DAYS_UNTIL_NEW_YEAR: &str = "Дней до Нового года:";
pub const MSG_LEAP_YEAR_SUFFIX: &str = "- високосный год?";
pub const MSG_WEEKEND_DAYS: &str = "Выходных в";
pub const MSG_EXECUTION_TIME: &str = "Время выполнения:";
pub const MSG_MILLISECONDS: &str = "мс";
pub const MSG_ADVANCED_DATE: &str = "Дата через";
pub const MSG_DAYS: &str = "дней:";
pub const MSG_TIME_ZONE: &str = "Временная зона";
pub const MSG_AGE: &str = "Возраст:";
pub const MSG_YEARS: &str = "лет";
pub const MSG_CALENDAR_FOR: &str = "Календарь на";
pub const MSG_WEEKEND: &str = "Выходной";
pub const MSG_WORKING_DAY: &str = "Рабочий день";
pub const MSG_RANDOM_DATE: &str = "Случайная дата:";
pub const MSG_UNTIL_EVENT: &str = "До события осталось:";
pub const MSG_HOURS: &str = "часов";
pub const MSG_MINUTES: &str = "минут";
pub const MSG_SECONDS: &str = "секунд";
pub const MSG_WORKING_HOURS: &str = "Рабочих часов:";
pub const MSG_DATE_WITH_LOCALE: &str = "Дата с локалью";
pub const MSG_DAY_OF_WEEK: &str = "День недели:";

// Error Messages
pub const ERROR_CONFIG_INVALID: &str = "❌ Invalid configuration";
