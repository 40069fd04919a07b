use crate::{
    application::aggregate_regions::use_case::AggregateRegionsUseCase, config::Config,
    domain::telemetry::repository::TelemetrySource,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub telemetry: Arc<dyn TelemetrySource>,
    pub aggregator: Arc<AggregateRegionsUseCase>,
}

impl AppState {
    /// Wires the aggregation use case onto `telemetry`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured default threshold is not finite.
    pub fn new(config: Config, telemetry: Arc<dyn TelemetrySource>) -> anyhow::Result<Self> {
        let aggregator = Arc::new(AggregateRegionsUseCase::new(
            telemetry.clone(),
            config.default_threshold()?,
        ));
        Ok(Self {
            config,
            telemetry,
            aggregator,
        })
    }
}
