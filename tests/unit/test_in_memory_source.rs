use latency_api::{
    domain::telemetry::{entity::Sample, errors::DomainError, repository::TelemetrySource},
    infrastructure::telemetry::in_memory::InMemoryTelemetrySource,
};
use std::collections::HashMap;

#[tokio::test]
async fn unknown_region_yields_empty_samples() {
    let source = InMemoryTelemetrySource::with_demo_data();
    assert!(source.fetch("apac").await.unwrap().is_empty());
    assert_eq!(source.fetch("emea").await.unwrap().len(), 2);
    assert!(source.health().await.is_ok());
}

#[tokio::test]
async fn snapshot_parses_integer_samples() {
    let source = InMemoryTelemetrySource::from_json_str(
        r#"{"apac": [{"latency": 90, "uptime": 100}, {"latency": 310.5, "uptime": 97.25}], "empty": []}"#,
    )
    .expect("snapshot should parse");

    assert_eq!(source.region_count(), 2);
    assert_eq!(
        source.fetch("apac").await.unwrap(),
        vec![
            Sample { latency: 90.0, uptime: 100.0 },
            Sample { latency: 310.5, uptime: 97.25 },
        ]
    );
    assert!(source.fetch("empty").await.unwrap().is_empty());
}

#[test]
fn snapshot_with_missing_field_is_rejected() {
    let err = InMemoryTelemetrySource::from_json_str(r#"{"emea": [{"latency": 100}]}"#)
        .unwrap_err();
    assert!(matches!(err, DomainError::DataIntegrity(_)));
}

#[test]
fn snapshot_with_negative_latency_is_rejected() {
    let err = InMemoryTelemetrySource::from_json_str(
        r#"{"emea": [{"latency": -1, "uptime": 99}]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, DomainError::DataIntegrity(msg) if msg.contains("emea")));
}

#[test]
fn constructor_checks_every_sample() {
    let regions = HashMap::from([(
        "emea".to_string(),
        vec![Sample { latency: f64::NAN, uptime: 99.0 }],
    )]);
    assert!(InMemoryTelemetrySource::new(regions).is_err());
}

#[test]
fn missing_snapshot_file_is_an_infrastructure_error() {
    let err = InMemoryTelemetrySource::from_json_file("/nonexistent/telemetry.json").unwrap_err();
    assert!(matches!(err, DomainError::InfrastructureError(_)));
}
