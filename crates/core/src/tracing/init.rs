//! Initialization of the tracing subscriber

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use super::config::{InstrumentationConfig, LogFormat};

/// Initialize tracing with the given configuration
pub fn init_tracing(config: &InstrumentationConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()?,
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()?,
    }

    ::tracing::info!(
        service = %config.service_name,
        version = %config.service_version,
        "Tracing initialized"
    );
    Ok(())
}
