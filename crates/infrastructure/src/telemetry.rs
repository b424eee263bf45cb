//! Logging initialization
//!
//! Console logging through `tracing-subscriber`. `RUST_LOG` wins over the
//! configured filter when it is set.

use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::error::InfrastructureError;

/// Install the global tracing subscriber
///
/// `filter_override` replaces the configured level, e.g. when the CLI was
/// started with `-v`.
///
/// # Errors
///
/// Returns `InfrastructureError::Logging` if a subscriber is already set.
pub fn init_logging(
    config: &LoggingConfig,
    filter_override: Option<&str>,
) -> Result<(), InfrastructureError> {
    let directive = filter_override.unwrap_or(&config.level);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    let json_layer = config.json.then(|| fmt::layer().json().with_target(true));
    let pretty_layer = (!config.json).then(|| fmt::layer().with_target(false));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer)
        .try_init()
        .map_err(|e| InfrastructureError::Logging(e.to_string()))?;

    debug!(filter = directive, json = config.json, "Logging initialized");
    Ok(())
}
