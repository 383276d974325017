//! Tracing/logging initialization.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ObservabilityConfig};

/// Initialize tracing/logging from the environment.
///
/// Falls back to the default configuration if the environment is malformed.
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let config = ObservabilityConfig::from_env().unwrap_or_default();
    if init_with(&config).is_err() {
        let _ = init_with(&ObservabilityConfig::default());
    }
}

/// Install a global subscriber for `config`.
///
/// Fails only if the filter directives do not parse. If a subscriber is
/// already installed this is a no-op.
pub fn init_with(config: &ObservabilityConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&config.filter)
        .with_context(|| format!("invalid log filter '{}'", config.filter))?;

    // Timestamps always on; target is noise for a small workspace.
    let _ = match config.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .with_target(false)
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .pretty()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .with_target(false)
            .try_init(),
    };

    Ok(())
}
