use super::entity::Sample;
use super::errors::DomainError;
use async_trait::async_trait;

/// Read-only access to the samples recorded for each region.
#[async_trait]
pub trait TelemetrySource: Send + Sync {
    /// Returns the samples currently held for `region`.
    ///
    /// Unknown regions yield an empty vector, never an error.
    async fn fetch(&self, region: &str) -> Result<Vec<Sample>, DomainError>;

    /// Reports whether the backing store can currently serve fetches.
    async fn health(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
