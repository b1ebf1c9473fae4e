//! Server configuration

use std::time::Duration;

use http::HeaderValue;
use shared::error::AppError;

/// Database pool sizing and timeouts
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    /// How long to wait for a free connection
    pub acquire_timeout: Duration,
    /// Idle connections are closed after this long
    pub idle_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 5,
            min_connections: 0,
            acquire_timeout: Duration::from_millis(30_000),
            idle_timeout: Duration::from_millis(10_000),
        }
    }
}

/// Warehouse server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// HTTP port
    pub http_port: u16,
    /// The one origin allowed to call the API cross-origin
    pub allowed_origin: HeaderValue,
    /// Environment: development | staging | production
    pub environment: String,
    pub pool: PoolConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from any name -> value source.
    ///
    /// Unparsable numeric settings fall back to their defaults. A missing
    /// `DATABASE_URL` or an origin that is not a valid header value is a
    /// `ConfigError`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let parse = |name: &str| lookup(name).and_then(|v| v.parse::<u64>().ok());
        let defaults = PoolConfig::default();

        let origin = lookup("ALLOWED_ORIGIN").unwrap_or_else(|| "http://localhost:5173".into());
        let allowed_origin = HeaderValue::from_str(&origin).map_err(|e| {
            AppError::config(format!("ALLOWED_ORIGIN is not a valid header value: {e}"))
                .with_detail("setting", "ALLOWED_ORIGIN")
        })?;

        let database_url = lookup("DATABASE_URL").ok_or_else(|| {
            AppError::config("DATABASE_URL must be set").with_detail("setting", "DATABASE_URL")
        })?;

        Ok(Self {
            database_url,
            http_port: parse("HTTP_PORT")
                .and_then(|p| u16::try_from(p).ok())
                .unwrap_or(3001),
            allowed_origin,
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            pool: PoolConfig {
                max_connections: parse("DB_POOL_MAX")
                    .and_then(|n| u32::try_from(n).ok())
                    .unwrap_or(defaults.max_connections),
                min_connections: parse("DB_POOL_MIN")
                    .and_then(|n| u32::try_from(n).ok())
                    .unwrap_or(defaults.min_connections),
                acquire_timeout: parse("DB_POOL_ACQUIRE_MS")
                    .map(Duration::from_millis)
                    .unwrap_or(defaults.acquire_timeout),
                idle_timeout: parse("DB_POOL_IDLE_MS")
                    .map(Duration::from_millis)
                    .unwrap_or(defaults.idle_timeout),
            },
        })
    }
}
