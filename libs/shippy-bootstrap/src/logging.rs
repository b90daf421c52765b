//! Logging initialization for the Shippy binaries.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{LogFormat, LoggingConfig};

/// Resolve the default filter directive from config and `-v` count.
///
/// `-v` = info, `-vv` = debug, `-vvv` and beyond = trace; without `-v` the
/// configured level is used.
#[must_use]
pub fn level_directive(cfg: &LoggingConfig, verbose: u8) -> String {
    match verbose {
        0 => cfg.level.clone(),
        1 => "info".to_owned(),
        2 => "debug".to_owned(),
        _ => "trace".to_owned(),
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG`, when set, overrides the configured level.
///
/// # Errors
/// Returns an error if the level directive is invalid or a global subscriber
/// is already installed.
pub fn init_logging(cfg: &LoggingConfig, verbose: u8) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level_directive(cfg, verbose))?,
    };

    let (json_layer, text_layer) = match cfg.format {
        LogFormat::Json => (Some(fmt::layer().json().with_target(true)), None),
        LogFormat::Text => (None, Some(fmt::layer().with_target(true).compact())),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()?;

    Ok(())
}
