use crate::domain::telemetry::errors::DomainError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_THRESHOLD_MS: f64 = 180.0;

/// Latency limit in milliseconds above which a sample counts as a breach.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Threshold(f64);

impl Threshold {
    pub fn new(millis: f64) -> Result<Self, DomainError> {
        if !millis.is_finite() {
            return Err(DomainError::ValidationError(format!(
                "threshold_ms must be a finite number, got {}",
                millis
            )));
        }
        Ok(Self(millis))
    }

    pub fn millis(&self) -> f64 {
        self.0
    }

    /// Strict comparison: a latency equal to the threshold is not a breach.
    pub fn is_breached_by(&self, latency: f64) -> bool {
        latency > self.0
    }
}

impl TryFrom<f64> for Threshold {
    type Error = DomainError;

    fn try_from(millis: f64) -> Result<Self, Self::Error> {
        Self::new(millis)
    }
}

impl From<Threshold> for f64 {
    fn from(threshold: Threshold) -> Self {
        threshold.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD_MS)
    }
}
