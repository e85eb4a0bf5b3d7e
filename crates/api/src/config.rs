use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
#[error("{name} must be a valid {kind}, got `{value}`")]
pub struct ConfigError {
    pub name: &'static str,
    pub kind: &'static str,
    pub value: String,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server host to bind to.
    pub host: String,
    /// Server port to bind to.
    pub port: u16,
    /// PostgreSQL connection URL. Without one the server runs on an
    /// in-memory store seeded from the bundled catalog.
    pub database_url: Option<String>,
    /// Maximum database connections in the pool.
    pub db_max_connections: u32,
    /// Minimum database connections in the pool.
    pub db_min_connections: u32,
    /// Upper bound on a single content store call, in milliseconds.
    pub store_timeout_ms: u64,
    /// Event bus channel capacity.
    pub event_bus_capacity: usize,
    /// Largest accepted request body.
    pub body_limit_bytes: usize,
    /// Log level (e.g., "info", "debug", "trace").
    pub log_level: String,
}

fn parsed<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    kind: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError {
            name,
            kind,
            value: raw,
        }),
    }
}

impl AppConfig {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup. Missing keys take defaults;
    /// present but unparsable numbers are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parsed(&lookup, "PORT", "u16", 3030)?,
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            db_max_connections: parsed(&lookup, "DB_MAX_CONNECTIONS", "u32", 20)?,
            db_min_connections: parsed(&lookup, "DB_MIN_CONNECTIONS", "u32", 5)?,
            store_timeout_ms: parsed(&lookup, "STORE_TIMEOUT_MS", "u64", 2000)?,
            event_bus_capacity: parsed(&lookup, "EVENT_BUS_CAPACITY", "usize", 1024)?,
            body_limit_bytes: parsed(&lookup, "BODY_LIMIT_BYTES", "usize", 64 * 1024)?,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Build the socket address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }
}
