//! Logger installation for the `meridian` binary.
//!
//! Library crates emit through the `log` facade; only the binary decides where
//! records go. Logs are written to stderr so the rendered route on stdout stays
//! clean.

use std::str::FromStr;

use env_logger::{Builder, Target, WriteStyle};
use log::LevelFilter;

use crate::CliError;

/// Parse a level name such as `info` or `DEBUG`.
pub(crate) fn parse_level(value: &str) -> Result<LevelFilter, CliError> {
    LevelFilter::from_str(value.trim()).map_err(|_| CliError::InvalidLogLevel {
        value: value.to_owned(),
    })
}

/// Install the process-wide logger.
pub(crate) fn init(level: LevelFilter) -> Result<(), CliError> {
    Builder::new()
        .filter_level(level)
        .write_style(WriteStyle::Never)
        .format_timestamp(None)
        .target(Target::Stderr)
        .try_init()
        .map_err(CliError::InitLogging)
}
