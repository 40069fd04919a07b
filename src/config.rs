//! Application configuration loading from environment variables.
//!
//! All configuration is read from the environment at startup (after `dotenvy`
//! has loaded any `.env` file).
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Logging level (default: "info,latency_api=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 3000)
//! - `TELEMETRY_BACKEND`: `static`, `file` or `redis` (default: "static")
//! - `TELEMETRY_FILE`: JSON snapshot path, required for the `file` backend
//! - `REDIS_URL`: Redis connection URL, required for the `redis` backend
//! - `REDIS_KEY_PREFIX`: Prefix of per-region sample lists (default: "telemetry:")
//! - `DEFAULT_THRESHOLD_MS`: Breach threshold when a request omits one (default: 180)
//! - `ALLOWED_ORIGINS`: Comma-separated CORS origins, `*` for any (default: "*")
//! - `BODY_LIMIT_BYTES`: Maximum accepted request body (default: 65536)

use crate::domain::statistics::value_objects::{DEFAULT_THRESHOLD_MS, Threshold};
use serde::Deserialize;
use std::{fmt, str::FromStr};

/// Where region samples are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TelemetryBackend {
    /// Built-in demo table.
    Static,
    /// JSON snapshot loaded once at startup.
    File,
    /// Redis lists, read on every request.
    Redis,
}

impl TelemetryBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::File => "file",
            Self::Redis => "redis",
        }
    }
}

impl fmt::Display for TelemetryBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TelemetryBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(Self::Static),
            "file" => Ok(Self::File),
            "redis" => Ok(Self::Redis),
            other => Err(format!(
                "unknown telemetry backend '{}', expected static, file or redis",
                other
            )),
        }
    }
}

/// Complete server configuration loaded from environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Telemetry store backing the aggregation endpoint
    pub telemetry_backend: TelemetryBackend,

    /// Path of the JSON snapshot for the `file` backend
    pub telemetry_file: Option<String>,

    /// Redis connection URL for the `redis` backend
    pub redis_url: Option<String>,

    /// Prefix prepended to region keys when reading Redis lists
    pub redis_key_prefix: String,

    /// Threshold applied when a request does not carry `threshold_ms`
    pub default_threshold_ms: f64,

    /// CORS origins; empty or `*` allows any origin
    pub allowed_origins: Vec<String>,

    /// Maximum request body size in bytes
    pub body_limit_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or if the
    /// selected backend is missing its required variable.
    pub fn from_env() -> anyhow::Result<Self> {
        let config = Self {
            host: env_or("HOST", "0.0.0.0".to_string())?,
            port: env_or("PORT", 3000)?,
            telemetry_backend: env_or("TELEMETRY_BACKEND", TelemetryBackend::Static)?,
            telemetry_file: std::env::var("TELEMETRY_FILE").ok(),
            redis_url: std::env::var("REDIS_URL").ok(),
            redis_key_prefix: env_or("REDIS_KEY_PREFIX", "telemetry:".to_string())?,
            default_threshold_ms: env_or("DEFAULT_THRESHOLD_MS", DEFAULT_THRESHOLD_MS)?,
            allowed_origins: parse_origins(&env_or("ALLOWED_ORIGINS", "*".to_string())?),
            body_limit_bytes: env_or("BODY_LIMIT_BYTES", 64 * 1024)?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        match self.telemetry_backend {
            TelemetryBackend::File if self.telemetry_file.is_none() => {
                anyhow::bail!("TELEMETRY_FILE is required when TELEMETRY_BACKEND=file")
            }
            TelemetryBackend::Redis if self.redis_url.is_none() => {
                anyhow::bail!("REDIS_URL is required when TELEMETRY_BACKEND=redis")
            }
            _ => {}
        }
        self.default_threshold()?;
        Ok(())
    }

    pub fn default_threshold(&self) -> anyhow::Result<Threshold> {
        Threshold::new(self.default_threshold_ms)
            .map_err(|e| anyhow::anyhow!("Invalid DEFAULT_THRESHOLD_MS: {}", e))
    }

    /// Whether CORS should answer with a wildcard origin.
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            telemetry_backend: TelemetryBackend::Static,
            telemetry_file: None,
            redis_url: None,
            redis_key_prefix: "telemetry:".to_string(),
            default_threshold_ms: DEFAULT_THRESHOLD_MS,
            allowed_origins: vec!["*".to_string()],
            body_limit_bytes: 64 * 1024,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

/// Load an environment variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
