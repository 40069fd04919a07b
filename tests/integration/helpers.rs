use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use latency_api::{
    config::Config,
    domain::telemetry::{
        entity::Sample, errors::DomainError, repository::TelemetrySource,
    },
    infrastructure::telemetry::in_memory::InMemoryTelemetrySource,
    presentation::http::{routes::create_router, state::AppState},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::{collections::HashMap, sync::Arc};
use tower::ServiceExt;

/// Source whose store is always unreachable.
pub struct UnreachableSource;

#[async_trait]
impl TelemetrySource for UnreachableSource {
    async fn fetch(&self, _region: &str) -> Result<Vec<Sample>, DomainError> {
        Err(DomainError::InfrastructureError("connection refused".into()))
    }

    async fn health(&self) -> Result<(), DomainError> {
        Err(DomainError::InfrastructureError("connection refused".into()))
    }
}

/// Source that serves a sample breaking the data contract.
pub struct CorruptSource;

#[async_trait]
impl TelemetrySource for CorruptSource {
    async fn fetch(&self, region: &str) -> Result<Vec<Sample>, DomainError> {
        Err(DomainError::DataIntegrity(format!(
            "telemetry:{}[0] is missing uptime",
            region
        )))
    }
}

pub fn fixture_source() -> InMemoryTelemetrySource {
    InMemoryTelemetrySource::new(HashMap::from([
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
        ("empty".to_string(), Vec::new()),
    ]))
    .expect("fixture samples are valid")
}

pub fn spawn_app_with(config: Config, telemetry: Arc<dyn TelemetrySource>) -> Router {
    create_router(AppState::new(config, telemetry).expect("valid test configuration"))
}

pub fn spawn_app() -> Router {
    spawn_app_with(Config::default(), Arc::new(fixture_source()))
}

pub async fn send(app: &Router, req: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(req).await.expect("request failed")
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

pub async fn read_json<T: DeserializeOwned>(res: axum::response::Response) -> T {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("failed to parse json")
}

pub async fn read_text(res: axum::response::Response) -> String {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    String::from_utf8(bytes.to_vec()).expect("invalid utf8")
}

pub async fn expect_status(
    res: axum::response::Response,
    expected: StatusCode,
) -> axum::response::Response {
    let actual = res.status();

    if actual == expected {
        return res;
    }

    let body = read_text(res).await;
    panic!(
        "HTTP status mismatch. Expected {}, got {}. Response body: {}",
        expected, actual, body
    );
}

pub fn assert_record(record: &Value, avg_latency: f64, p95_latency: f64, avg_uptime: f64, breaches: u64) {
    let field = |name: &str| {
        record[name]
            .as_f64()
            .unwrap_or_else(|| panic!("{} should be a number in {}", name, record))
    };
    assert!((field("avg_latency") - avg_latency).abs() < 1e-9, "avg_latency in {}", record);
    assert!((field("p95_latency") - p95_latency).abs() < 1e-9, "p95_latency in {}", record);
    assert!((field("avg_uptime") - avg_uptime).abs() < 1e-9, "avg_uptime in {}", record);
    assert_eq!(record["breaches"].as_u64(), Some(breaches), "breaches in {}", record);
}
