//! Telemetry store adapters.

pub mod in_memory;
pub mod redis_source;

use crate::{
    config::{Config, TelemetryBackend},
    domain::telemetry::repository::TelemetrySource,
};
use in_memory::InMemoryTelemetrySource;
use redis_source::RedisTelemetrySource;
use std::sync::Arc;

/// Constructs the source selected by `TELEMETRY_BACKEND`.
///
/// File snapshots are read and checked here, so a bad file stops startup.
pub fn build_source(config: &Config) -> anyhow::Result<Arc<dyn TelemetrySource>> {
    let source: Arc<dyn TelemetrySource> = match config.telemetry_backend {
        TelemetryBackend::Static => Arc::new(InMemoryTelemetrySource::with_demo_data()),
        TelemetryBackend::File => {
            let path = config
                .telemetry_file
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("TELEMETRY_FILE is not set"))?;
            Arc::new(InMemoryTelemetrySource::from_json_file(path)?)
        }
        TelemetryBackend::Redis => {
            let url = config
                .redis_url
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("REDIS_URL is not set"))?;
            let client = redis::Client::open(url)?;
            Arc::new(RedisTelemetrySource::new(
                client,
                config.redis_key_prefix.clone(),
            ))
        }
    };
    tracing::info!(backend = %config.telemetry_backend, "Telemetry source ready");
    Ok(source)
}
