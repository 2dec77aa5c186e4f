//! Logging setup.
//!
//! The UI owns stdout, so logs only go to a file. Without `--log-file`
//! nothing is installed and the `tracing` macros stay silent.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::StoreConfig;
use crate::error::LogError;

const DEFAULT_FILTER: &str = "info";

/// Build the filter: `--log-level`, then `RUST_LOG`, then "info".
///
/// An explicit `--log-level` must parse. A missing or unusable `RUST_LOG`
/// falls back to the default.
pub fn filter(config: &StoreConfig) -> Result<EnvFilter, LogError> {
    match &config.log_level {
        Some(level) => EnvFilter::try_new(level).map_err(|source| LogError::Filter {
            filter: level.clone(),
            source,
        }),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Install a file subscriber if a log file was configured.
///
/// The filter is checked even without a log file, so a bad `--log-level`
/// is reported either way. Returns whether a subscriber was installed. A
/// subscriber installed earlier (tests, embedding app) is left in place.
pub fn init(config: &StoreConfig) -> Result<bool, LogError> {
    let filter = filter(config)?;
    let Some(path) = &config.log_file else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LogError::Open {
            path: path.clone(),
            source,
        })?;
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();

    Ok(installed)
}
