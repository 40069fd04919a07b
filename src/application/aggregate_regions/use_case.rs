use super::dto::{AggregationRequest, AggregationResponse};
use crate::domain::{
    statistics::{entity::StatisticsRecord, value_objects::Threshold},
    telemetry::{errors::DomainError, repository::TelemetrySource},
};
use futures_util::future::try_join_all;
use std::{collections::BTreeSet, sync::Arc};
use tracing::{Span, debug, field, instrument};
use validator::Validate;

pub struct AggregateRegionsUseCase {
    source: Arc<dyn TelemetrySource>,
    default_threshold: Threshold,
}

impl AggregateRegionsUseCase {
    pub fn new(source: Arc<dyn TelemetrySource>, default_threshold: Threshold) -> Self {
        Self {
            source,
            default_threshold,
        }
    }

    /// Summarizes every distinct region named in the request.
    ///
    /// Regions are fetched concurrently; a failed fetch fails the whole call.
    #[instrument(
        skip(self, request),
        fields(regions = request.regions.len(), threshold_ms = field::Empty)
    )]
    pub async fn execute(
        &self,
        request: AggregationRequest,
    ) -> Result<AggregationResponse, DomainError> {
        request
            .validate()
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;

        let threshold = match request.threshold_ms {
            Some(millis) => Threshold::new(millis)?,
            None => self.default_threshold,
        };
        Span::current().record("threshold_ms", threshold.millis());

        let regions: BTreeSet<&str> = request.regions.iter().map(String::as_str).collect();
        let records = try_join_all(
            regions
                .into_iter()
                .map(|region| self.summarize_region(region, threshold)),
        )
        .await?;

        Ok(records.into_iter().collect())
    }

    async fn summarize_region(
        &self,
        region: &str,
        threshold: Threshold,
    ) -> Result<(String, StatisticsRecord), DomainError> {
        let samples = self.source.fetch(region).await?;
        if samples.is_empty() {
            // unknown and empty regions are reported identically
            debug!(region, "no samples available, reporting zeroed record");
            return Ok((region.to_string(), StatisticsRecord::zeroed()));
        }

        let record = StatisticsRecord::from_samples(&samples, threshold);
        debug!(
            region,
            samples = samples.len(),
            threshold_ms = threshold.millis(),
            breaches = record.breaches,
            "region summarized"
        );
        Ok((region.to_string(), record))
    }
}
