use std::net::IpAddr;
use std::time::Duration;

use axum::http::HeaderValue;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub cors_origins: Vec<HeaderValue>,
    pub request_timeout: Duration,
    pub db_max_connections: u32,
    pub max_body_size: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;
        let jwt_secret = env_required("JWT_SECRET_KEY")?;
        if jwt_secret.trim().is_empty() {
            return Err("JWT_SECRET_KEY must not be empty".to_string());
        }

        let host: IpAddr = env_or("ROOMBOOK_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid ROOMBOOK_HOST: {e}"))?;

        let port: u16 = env_or("ROOMBOOK_PORT", "8080")
            .parse()
            .map_err(|e| format!("Invalid ROOMBOOK_PORT: {e}"))?;

        let log_level = env_or("ROOMBOOK_LOG_LEVEL", "info");

        let cors_origins = parse_origins(&env_or("ROOMBOOK_CORS_ORIGINS", "http://localhost:5173"))?;

        let timeout_secs: u64 = env_or("ROOMBOOK_REQUEST_TIMEOUT_SECS", "10")
            .parse()
            .map_err(|e| format!("Invalid ROOMBOOK_REQUEST_TIMEOUT_SECS: {e}"))?;
        if timeout_secs == 0 {
            return Err("ROOMBOOK_REQUEST_TIMEOUT_SECS must be greater than 0".to_string());
        }

        let db_max_connections: u32 = env_or("ROOMBOOK_DB_MAX_CONNECTIONS", "10")
            .parse()
            .map_err(|e| format!("Invalid ROOMBOOK_DB_MAX_CONNECTIONS: {e}"))?;

        let max_body_size: usize = env_or("ROOMBOOK_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid ROOMBOOK_MAX_BODY_SIZE: {e}"))?;

        Ok(Config {
            database_url,
            jwt_secret,
            host,
            port,
            log_level,
            cors_origins,
            request_timeout: Duration::from_secs(timeout_secs),
            db_max_connections,
            max_body_size,
        })
    }
}

/// Parse a comma separated list of allowed CORS origins.
pub fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            HeaderValue::from_str(s)
                .map_err(|e| format!("Invalid ROOMBOOK_CORS_ORIGINS entry '{s}': {e}"))
        })
        .collect()
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
