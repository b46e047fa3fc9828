//! # Telemetry
//!
//! Tracing subscriber setup driven by [`LoggingSettings`].
//!
//! `RUST_LOG` overrides the configured level when set.

use crate::infrastructure::config::{LogFormat, LoggingSettings};
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(settings: &LoggingSettings) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));

    match settings.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .try_init()?,
        LogFormat::Pretty => tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(env_filter)
            .try_init()?,
        LogFormat::Compact => tracing_subscriber::fmt()
            .compact()
            .with_env_filter(env_filter)
            .try_init()?,
    }

    tracing::info!(
        level = %settings.level,
        format = ?settings.format,
        "logging initialized"
    );
    Ok(())
}
