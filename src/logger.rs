//! Log output setup
//!
//! Library code only emits `log` records; the binary decides where they go by
//! installing the dispatch built here from [`LoggingConfig`].

use crate::config::LoggingConfig;
use crate::constants::LOG_TIMESTAMP_FORMAT;
use anyhow::{Context, Result};
use chrono::Utc;

/// Build a dispatch for `config` without installing it
pub fn dispatch(config: &LoggingConfig) -> Result<fern::Dispatch> {
    let level = config.level_filter()?;
    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Utc::now().format(LOG_TIMESTAMP_FORMAT),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level);

    if !config.enabled {
        return Ok(dispatch);
    }

    let dispatch = match &config.file {
        Some(path) => dispatch.chain(
            fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?,
        ),
        None => dispatch.chain(std::io::stderr()),
    };
    Ok(dispatch)
}

/// Install the process-wide logger; call once at startup
pub fn init(config: &LoggingConfig) -> Result<()> {
    dispatch(config)?.apply().context("Failed to install logger")?;
    Ok(())
}
