use axum::Json;

pub async fn api_docs() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Region Latency API",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/": { "post": { "summary": "Aggregate latency and uptime per region" } },
            "/api/v1/latency": { "post": { "summary": "Aggregate latency and uptime per region" } },
            "/health": { "get": { "summary": "Health check" } },
            "/api/v1/docs": { "get": { "summary": "OpenAPI spec" } }
        },
        "components": {
            "schemas": {
                "AggregationRequest": {
                    "type": "object",
                    "properties": {
                        "regions": { "type": "array", "items": { "type": "string" }, "maxItems": 256 },
                        "threshold_ms": { "type": "number", "default": 180 }
                    }
                },
                "StatisticsRecord": {
                    "type": "object",
                    "properties": {
                        "avg_latency": { "type": "number" },
                        "p95_latency": { "type": "number" },
                        "avg_uptime": { "type": "number" },
                        "breaches": { "type": "integer" }
                    }
                }
            }
        }
    }))
}
