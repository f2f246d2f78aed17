//! Configuration management for almanac
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_INPUT_PATTERN, DEFAULT_LOCALE, DEFAULT_LOG_LEVEL,
    DEFAULT_OUTPUT_PATTERN, DEFAULT_SOURCE_ZONE, DEFAULT_TARGET_ZONE, DEFAULT_TIME_FORMAT, DEFAULT_WEEKDAY_LANGUAGE,
};
use crate::locale;
use crate::pattern::DatePattern;
use crate::zone;
use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
    pub demo: DemoConfig,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Token pattern for dates read from text (e.g. "dd-MM-yyyy")
    pub input_pattern: String,
    /// Token pattern for dates written out (e.g. "yyyy/MM/dd")
    pub output_pattern: String,
    /// chrono format for times of day
    pub time_format: String,
    /// Locale used for month names
    pub locale: String,
    /// Language used for weekday names
    pub weekday_language: String,
    /// Zone the current instant is read in before conversion
    pub source_zone: String,
    /// Zone the current instant is converted to
    pub target_zone: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Level filter: off, error, warn, info, debug or trace
    pub level: String,
    /// Write log lines to this file instead of stderr
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Example inputs fed to each demonstration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Dates compared against each other, also the bounds of the random date
    pub first_date: NaiveDate,
    pub second_date: NaiveDate,
    /// Year checked for being a leap year
    pub leap_year: i32,
    /// Month listed and scanned for weekends
    pub calendar_month: u32,
    pub calendar_year: i32,
    /// Number of empty loop iterations that get timed
    pub busy_loop_iterations: u64,
    /// Date text parsed with the input pattern
    pub date_text: String,
    /// Days added to the parsed date
    pub advance_days: i64,
    pub birth_date: NaiveDate,
    /// Event the countdown runs to
    pub event: NaiveDateTime,
    pub work_start: NaiveDateTime,
    pub work_end: NaiveDateTime,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            input_pattern: DEFAULT_INPUT_PATTERN.to_string(),
            output_pattern: DEFAULT_OUTPUT_PATTERN.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            weekday_language: DEFAULT_WEEKDAY_LANGUAGE.to_string(),
            source_zone: DEFAULT_SOURCE_ZONE.to_string(),
            target_zone: DEFAULT_TARGET_ZONE.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: None,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
        let at = |date: NaiveDate, h, min| date.and_hms_opt(h, min, 0).unwrap_or_default();

        Self {
            first_date: date(2023, 1, 1),
            second_date: date(2024, 1, 1),
            leap_year: 2024,
            calendar_month: 1,
            calendar_year: 2024,
            busy_loop_iterations: 1_000_000,
            date_text: "15-01-2024".to_string(),
            advance_days: 10,
            birth_date: date(1995, 5, 23),
            event: at(date(2024, 12, 31), 23, 59),
            work_start: at(date(2024, 1, 15), 9, 0),
            work_end: at(date(2024, 1, 15), 18, 0),
        }
    }
}

impl LoggingConfig {
    /// Parsed level filter; `Off` when logging is disabled
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        if !self.enabled {
            return Ok(log::LevelFilter::Off);
        }
        log::LevelFilter::from_str(&self.level).with_context(|| format!("Invalid log level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Ok(xdg_config) = Self::get_default_config_path() {
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.validate_display()?;

        // Validate logging
        if self.logging.enabled {
            self.logging.level_filter()?;
        }

        self.validate_demo()?;
        Ok(())
    }

    fn validate_display(&self) -> Result<()> {
        let display = &self.display;

        for (name, pattern) in [("input_pattern", &display.input_pattern), ("output_pattern", &display.output_pattern)] {
            DatePattern::from_str(pattern).with_context(|| format!("Invalid {}", name))?;
        }

        if StrftimeItems::new(&display.time_format).any(|item| matches!(item, Item::Error)) {
            anyhow::bail!("Invalid time_format '{}'", display.time_format);
        }

        locale::resolve_locale(&display.locale).context("Invalid locale")?;
        locale::weekday_names(&display.weekday_language).context("Invalid weekday_language")?;

        zone::resolve_zone(&display.source_zone).context("Invalid source_zone")?;
        zone::resolve_zone(&display.target_zone).context("Invalid target_zone")?;

        Ok(())
    }

    fn validate_demo(&self) -> Result<()> {
        let demo = &self.demo;

        if !(1..=12).contains(&demo.calendar_month) {
            anyhow::bail!("calendar_month must be between 1 and 12, got {}", demo.calendar_month);
        }

        if demo.first_date > demo.second_date {
            anyhow::bail!(
                "first_date {} must not be after second_date {}",
                demo.first_date,
                demo.second_date
            );
        }

        crate::pattern::parse_date(&demo.date_text, &self.display.input_pattern)
            .with_context(|| format!("date_text does not match input_pattern '{}'", self.display.input_pattern))?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# almanac configuration file\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(CONFIG_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
