use crate::domain::telemetry::{
    entity::Sample, errors::DomainError, repository::TelemetrySource,
};
use async_trait::async_trait;
use std::{collections::HashMap, path::Path};

/// Snapshot of samples held in process memory.
///
/// Built once at startup and never mutated while serving.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTelemetrySource {
    regions: HashMap<String, Vec<Sample>>,
}

impl InMemoryTelemetrySource {
    pub fn new(regions: HashMap<String, Vec<Sample>>) -> Result<Self, DomainError> {
        for (region, samples) in &regions {
            for sample in samples {
                sample.check_integrity().map_err(|e| {
                    DomainError::DataIntegrity(format!("region {}: {}", region, e))
                })?;
            }
        }
        Ok(Self { regions })
    }

    /// Built-in table served when no other backend is configured.
    pub fn with_demo_data() -> Self {
        let regions = HashMap::from([
            (
                "emea".to_string(),
                vec![
                    Sample { latency: 100.0, uptime: 99.0 },
                    Sample { latency: 200.0, uptime: 98.0 },
                ],
            ),
            (
                "amer".to_string(),
                vec![
                    Sample { latency: 150.0, uptime: 100.0 },
                    Sample { latency: 160.0, uptime: 99.0 },
                ],
            ),
        ]);
        Self { regions }
    }

    /// Parses `{"<region>": [{"latency": .., "uptime": ..}, ..]}`.
    pub fn from_json_str(json: &str) -> Result<Self, DomainError> {
        let regions: HashMap<String, Vec<Sample>> = serde_json::from_str(json)
            .map_err(|e| DomainError::DataIntegrity(format!("invalid telemetry snapshot: {}", e)))?;
        Self::new(regions)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            DomainError::InfrastructureError(format!(
                "failed to read telemetry file {}: {}",
                path.display(),
                e
            ))
        })?;
        let source = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            regions = source.region_count(),
            "Loaded telemetry snapshot"
        );
        Ok(source)
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }
}

#[async_trait]
impl TelemetrySource for InMemoryTelemetrySource {
    async fn fetch(&self, region: &str) -> Result<Vec<Sample>, DomainError> {
        Ok(self.regions.get(region).cloned().unwrap_or_default())
    }
}
