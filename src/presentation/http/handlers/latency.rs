use axum::{Json, body::Bytes, extract::State};

use crate::{
    application::aggregate_regions::dto::{AggregationRequest, AggregationResponse},
    presentation::http::{errors::AppError, state::AppState},
};

/// `POST /`: per-region latency and uptime summary.
///
/// The body is decoded as JSON whatever its declared content type, so plain
/// `text/plain` posts from browsers are accepted without a preflight.
pub async fn aggregate_latency(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AggregationResponse>, AppError> {
    let request: AggregationRequest = serde_json::from_slice(&body)?;
    let response = state.aggregator.execute(request).await?;

    Ok(Json(response))
}
