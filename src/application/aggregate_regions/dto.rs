use crate::domain::statistics::entity::StatisticsRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;
use validator::Validate;

pub const MAX_REGIONS_PER_REQUEST: u64 = 256;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, TS)]
#[ts(export)]
pub struct AggregationRequest {
    #[serde(default)]
    #[validate(length(max = MAX_REGIONS_PER_REQUEST))]
    pub regions: Vec<String>,
    #[serde(default)]
    pub threshold_ms: Option<f64>,
}

/// One record per distinct requested region, ordered by region key.
pub type AggregationResponse = BTreeMap<String, StatisticsRecord>;
