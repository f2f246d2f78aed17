//! Token-based date patterns
//!
//! Patterns are written with the familiar letter tokens (`dd-MM-yyyy`,
//! `yyyy/MM/dd`, `dd MMMM yyyy`) and compiled once into a chrono format string,
//! which then drives both formatting and parsing.
//!
//! | Token | Meaning |
//! |-------|---------|
//! | `yyyy` | full year, at least 4 digits (any run of `y` except 2) |
//! | `yy` | two-digit year |
//! | `M` / `MM` | month number, unpadded / zero-padded |
//! | `MMM` / `MMMM` | short / full month name |
//! | `d` / `dd` | day of month, unpadded / zero-padded |
//! | `EEE` / `EEEE` | short / full weekday name |
//! | `'text'` | quoted literal, `''` for a single quote |
//!
//! Any other non-letter character is copied as a literal.

use crate::error::{CalendarError, Result};
use crate::utils::date::plus_days;
use chrono::{Locale, NaiveDate, NaiveTime};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Year,
    YearTwoDigit,
    Month,
    MonthPadded,
    MonthShortName,
    MonthName,
    Day,
    DayPadded,
    WeekdayShortName,
    WeekdayName,
    Literal(String),
}

impl Token {
    fn is_numeric(&self) -> bool {
        matches!(
            self,
            Token::Year | Token::YearTwoDigit | Token::Month | Token::MonthPadded | Token::Day | Token::DayPadded
        )
    }

    fn push_strftime(&self, out: &mut String) {
        let spec = match self {
            Token::Year => "%Y",
            Token::YearTwoDigit => "%y",
            Token::Month => "%-m",
            Token::MonthPadded => "%m",
            Token::MonthShortName => "%b",
            Token::MonthName => "%B",
            Token::Day => "%-d",
            Token::DayPadded => "%d",
            Token::WeekdayShortName => "%a",
            Token::WeekdayName => "%A",
            Token::Literal(text) => {
                for c in text.chars() {
                    if c == '%' {
                        out.push_str("%%");
                    } else {
                        out.push(c);
                    }
                }
                return;
            }
        };
        out.push_str(spec);
    }
}

/// A compiled date pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    source: String,
    tokens: Vec<Token>,
    strftime: String,
}

impl DatePattern {
    /// The pattern as written
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The equivalent chrono format string
    pub fn strftime(&self) -> &str {
        &self.strftime
    }

    pub fn format(&self, date: NaiveDate) -> String {
        date.format(&self.strftime).to_string()
    }

    /// Whether every date survives a format/parse cycle through this pattern.
    ///
    /// Requires a full year plus a month and a day token; two-digit years lose
    /// the century. An unpadded day or month directly followed by another
    /// number is ambiguous when read back (`5112024` under `dMyyyy`).
    pub fn round_trips(&self) -> bool {
        let has = |wanted: &[Token]| self.tokens.iter().any(|t| wanted.contains(t));
        let unpadded_run = self
            .tokens
            .windows(2)
            .any(|pair| matches!(pair[0], Token::Day | Token::Month) && pair[1].is_numeric());

        has(&[Token::Year])
            && !has(&[Token::YearTwoDigit])
            && has(&[Token::Month, Token::MonthPadded, Token::MonthShortName, Token::MonthName])
            && has(&[Token::Day, Token::DayPadded])
            && !unpadded_run
    }

    /// Format with month and weekday names taken from `locale`
    pub fn format_localized(&self, date: NaiveDate, locale: Locale) -> String {
        date.and_time(NaiveTime::MIN)
            .and_utc()
            .format_localized(&self.strftime, locale)
            .to_string()
    }

    /// Parse `text`, rejecting both mismatches and impossible dates
    pub fn parse(&self, text: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(text, &self.strftime).map_err(|source| {
            log::debug!("'{}' does not match pattern '{}': {}", text, self.source, source);
            CalendarError::Parse {
                input: text.to_string(),
                pattern: self.source.clone(),
                source,
            }
        })
    }

    fn invalid(pattern: &str, reason: impl Into<String>) -> CalendarError {
        CalendarError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }
}

impl FromStr for DatePattern {
    type Err = CalendarError;

    fn from_str(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Err(Self::invalid(pattern, "pattern is empty"));
        }

        let mut tokens: Vec<Token> = Vec::new();

        let mut chars = pattern.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\'' {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    push_literal(&mut tokens, "'");
                    continue;
                }
                let mut literal = String::new();
                let mut closed = false;
                while let Some(q) = chars.next() {
                    if q != '\'' {
                        literal.push(q);
                    } else if chars.peek() == Some(&'\'') {
                        chars.next();
                        literal.push('\'');
                    } else {
                        closed = true;
                        break;
                    }
                }
                if !closed {
                    return Err(Self::invalid(pattern, "unterminated quoted literal"));
                }
                push_literal(&mut tokens, &literal);
            } else if c.is_ascii_alphabetic() {
                let mut count = 1;
                while chars.peek() == Some(&c) {
                    chars.next();
                    count += 1;
                }
                let token = match (c, count) {
                    ('y', 2) => Token::YearTwoDigit,
                    ('y', _) => Token::Year,
                    ('M', 1) => Token::Month,
                    ('M', 2) => Token::MonthPadded,
                    ('M', 3) => Token::MonthShortName,
                    ('M', _) => Token::MonthName,
                    ('d', 1) => Token::Day,
                    ('d', 2) => Token::DayPadded,
                    ('E', 1..=3) => Token::WeekdayShortName,
                    ('E', _) => Token::WeekdayName,
                    _ => {
                        let run: String = std::iter::repeat(c).take(count).collect();
                        return Err(Self::invalid(pattern, format!("unsupported token '{}'", run)));
                    }
                };
                tokens.push(token);
            } else {
                let mut buf = [0u8; 4];
                push_literal(&mut tokens, c.encode_utf8(&mut buf));
            }
        }

        let mut strftime = String::with_capacity(pattern.len() * 2);
        for token in &tokens {
            token.push_strftime(&mut strftime);
        }

        Ok(Self {
            source: pattern.to_string(),
            tokens,
            strftime,
        })
    }
}

fn push_literal(tokens: &mut Vec<Token>, text: &str) {
    match tokens.last_mut() {
        Some(Token::Literal(existing)) => existing.push_str(text),
        _ => tokens.push(Token::Literal(text.to_string())),
    }
}

impl fmt::Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Parse `text` as a date laid out according to `pattern`
pub fn parse_date(text: &str, pattern: &str) -> Result<NaiveDate> {
    pattern.parse::<DatePattern>()?.parse(text)
}

/// Render `date` according to `pattern`
pub fn format_date(date: NaiveDate, pattern: &str) -> Result<String> {
    Ok(pattern.parse::<DatePattern>()?.format(date))
}

/// Parse `text` with `input_pattern`, move it by `days` and render it with `output_pattern`
pub fn parse_and_advance(text: &str, input_pattern: &str, days: i64, output_pattern: &str) -> Result<String> {
    let output = output_pattern.parse::<DatePattern>()?;
    let date = parse_date(text, input_pattern)?;
    let advanced = plus_days(date, days).ok_or(CalendarError::OffsetOutOfRange { date, days })?;
    Ok(output.format(advanced))
}
