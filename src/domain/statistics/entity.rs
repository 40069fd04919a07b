use super::{
    percentile::{mean, percentile},
    value_objects::Threshold,
};
use crate::domain::telemetry::entity::Sample;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

const TAIL_PERCENTILE: f64 = 95.0;

/// Summary of one region's samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatisticsRecord {
    pub avg_latency: f64,
    pub p95_latency: f64,
    pub avg_uptime: f64,
    #[ts(type = "number")]
    pub breaches: u64,
}

impl StatisticsRecord {
    /// Record reported for a region without samples.
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// Reduces a region's samples to its summary.
    ///
    /// An empty slice yields [`StatisticsRecord::zeroed`].
    pub fn from_samples(samples: &[Sample], threshold: Threshold) -> Self {
        let latencies: Vec<f64> = samples.iter().map(|s| s.latency).collect();
        let uptimes: Vec<f64> = samples.iter().map(|s| s.uptime).collect();

        let (Some(avg_latency), Some(p95_latency), Some(avg_uptime)) = (
            mean(&latencies),
            percentile(&latencies, TAIL_PERCENTILE),
            mean(&uptimes),
        ) else {
            return Self::zeroed();
        };

        let breaches = latencies
            .iter()
            .filter(|latency| threshold.is_breached_by(**latency))
            .count() as u64;

        Self {
            avg_latency,
            p95_latency,
            avg_uptime,
            breaches,
        }
    }
}
