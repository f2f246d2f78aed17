//! Locale lookups
//!
//! Both supported locales and weekday names are plain tables; adding a language
//! means adding a row.

use crate::error::{CalendarError, Result};
use crate::pattern::DatePattern;
use chrono::{Datelike, Locale, NaiveDate};

/// Pattern used by [`format_with_locale`]
pub const LOCALE_DATE_PATTERN: &str = "dd MMMM yyyy";

/// Normalized locale tag -> chrono locale data
const LOCALES: &[(&str, Locale)] = &[
    ("en", Locale::en_US),
    ("en_us", Locale::en_US),
    ("en_gb", Locale::en_GB),
    ("ru", Locale::ru_RU),
    ("ru_ru", Locale::ru_RU),
    ("de", Locale::de_DE),
    ("de_de", Locale::de_DE),
    ("fr", Locale::fr_FR),
    ("fr_fr", Locale::fr_FR),
];

/// Language -> weekday names, Monday first
const WEEKDAY_NAMES: &[(&str, [&str; 7])] = &[
    (
        "ru",
        ["Понедельник", "Вторник", "Среда", "Четверг", "Пятница", "Суббота", "Воскресенье"],
    ),
    (
        "en",
        ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"],
    ),
    (
        "de",
        ["Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag", "Sonntag"],
    ),
    (
        "fr",
        ["lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche"],
    ),
];

/// Lowercase a tag and unify `-` and `_` separators
fn normalize_tag(tag: &str) -> String {
    tag.trim().replace('-', "_").to_lowercase()
}

fn unsupported(tag: &str) -> CalendarError {
    log::warn!("no locale data for '{}'", tag);
    CalendarError::UnsupportedLocale {
        locale: tag.to_string(),
    }
}

/// Resolve a locale tag such as `en`, `en-US` or `ru_RU`
pub fn resolve_locale(tag: &str) -> Result<Locale> {
    let normalized = normalize_tag(tag);
    LOCALES
        .iter()
        .find(|(key, _)| *key == normalized)
        .map(|(_, locale)| *locale)
        .ok_or_else(|| unsupported(tag))
}

/// Languages with a weekday-name table
pub fn supported_languages() -> impl Iterator<Item = &'static str> {
    WEEKDAY_NAMES.iter().map(|(language, _)| *language)
}

/// Render `date` as `dd MMMM yyyy` with the month name of `locale`
pub fn format_with_locale(date: NaiveDate, locale: &str) -> Result<String> {
    format_date_localized(date, LOCALE_DATE_PATTERN, locale)
}

/// Render `date` with any pattern, taking month and weekday names from `locale`
pub fn format_date_localized(date: NaiveDate, pattern: &str, locale: &str) -> Result<String> {
    let locale = resolve_locale(locale)?;
    let pattern: DatePattern = pattern.parse()?;
    Ok(pattern.format_localized(date, locale))
}

/// Weekday names for `language` (`ru`, `en`, `ru-RU`, ...), Monday first
pub fn weekday_names(language: &str) -> Result<&'static [&'static str; 7]> {
    let normalized = normalize_tag(language);
    let primary = normalized.split('_').next().unwrap_or_default();
    WEEKDAY_NAMES
        .iter()
        .find(|(key, _)| *key == primary)
        .map(|(_, names)| names)
        .ok_or_else(|| unsupported(language))
}

/// Name of the weekday of `date` in `language`
pub fn day_of_week_name(date: NaiveDate, language: &str) -> Result<&'static str> {
    let names = weekday_names(language)?;
    Ok(names[date.weekday().num_days_from_monday() as usize])
}
