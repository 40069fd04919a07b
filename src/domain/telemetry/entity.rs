use super::errors::DomainError;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One latency/uptime observation for a region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Sample {
    /// Round-trip latency in milliseconds.
    pub latency: f64,
    /// Availability percentage, conventionally within `0..=100`.
    pub uptime: f64,
}

impl Sample {
    pub fn new(latency: f64, uptime: f64) -> Result<Self, DomainError> {
        let sample = Self { latency, uptime };
        sample.check_integrity()?;
        Ok(sample)
    }

    /// Rejects samples that would make aggregates meaningless.
    ///
    /// Uptime is not range-checked, only non-finite values are refused.
    pub fn check_integrity(&self) -> Result<(), DomainError> {
        if !self.latency.is_finite() || self.latency < 0.0 {
            return Err(DomainError::DataIntegrity(format!(
                "latency must be a finite, non-negative number, got {}",
                self.latency
            )));
        }
        if !self.uptime.is_finite() {
            return Err(DomainError::DataIntegrity(format!(
                "uptime must be a finite number, got {}",
                self.uptime
            )));
        }
        Ok(())
    }
}
