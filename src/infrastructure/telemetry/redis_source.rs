use crate::domain::telemetry::{
    entity::Sample, errors::DomainError, repository::TelemetrySource,
};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::MultiplexedConnection};
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, error, warn};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Reads samples from Redis lists keyed `<prefix><region>`.
///
/// Each list element is one JSON-encoded sample. A missing key reads as an
/// empty list. All fetches share one multiplexed connection, opened on first
/// use; a failed connect is retried by the next caller.
pub struct RedisTelemetrySource {
    client: Client,
    key_prefix: String,
    connection: OnceCell<MultiplexedConnection>,
}

impl RedisTelemetrySource {
    pub fn new(client: Client, key_prefix: impl Into<String>) -> Self {
        Self {
            client,
            key_prefix: key_prefix.into(),
            connection: OnceCell::new(),
        }
    }

    fn key(&self, region: &str) -> String {
        format!("{}{}", self.key_prefix, region)
    }

    async fn connection(&self) -> Result<MultiplexedConnection, DomainError> {
        let conn = self
            .connection
            .get_or_try_init(|| async {
                let conn = tokio::time::timeout(
                    CONNECT_TIMEOUT,
                    self.client.get_multiplexed_async_connection(),
                )
                .await
                .map_err(|_| {
                    warn!("Redis connection timed out");
                    DomainError::InfrastructureError("Redis connection timed out".into())
                })?
                .map_err(redis_error)?;
                debug!("Redis telemetry connection established");
                Ok::<_, DomainError>(conn)
            })
            .await?;
        Ok(conn.clone())
    }
}

#[async_trait]
impl TelemetrySource for RedisTelemetrySource {
    async fn fetch(&self, region: &str) -> Result<Vec<Sample>, DomainError> {
        let mut conn = self.connection().await?;
        let key = self.key(region);
        let raw: Vec<String> = conn.lrange(&key, 0, -1).await.map_err(redis_error)?;

        raw.iter()
            .enumerate()
            .map(|(index, json)| decode_sample(&key, index, json))
            .collect()
    }

    async fn health(&self) -> Result<(), DomainError> {
        let mut conn = self.connection().await?;
        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(redis_error)?;
        Ok(())
    }
}

fn decode_sample(key: &str, index: usize, json: &str) -> Result<Sample, DomainError> {
    let sample: Sample = serde_json::from_str(json).map_err(|e| {
        DomainError::DataIntegrity(format!("{}[{}] is not a valid sample: {}", key, index, e))
    })?;
    sample
        .check_integrity()
        .map_err(|e| DomainError::DataIntegrity(format!("{}[{}]: {}", key, index, e)))?;
    Ok(sample)
}

fn redis_error(err: redis::RedisError) -> DomainError {
    error!(redis_error = %err, "Redis operation failed");
    DomainError::InfrastructureError(format!("Redis error: {}", err))
}
