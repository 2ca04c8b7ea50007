// src/config/server.rs
// Server, database, session, and logging configuration

use serde::{Deserialize, Serialize};

use super::helpers::{env_bool, env_opt, env_or, env_parsed};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host: env_or("TASKFLOW_HOST", "127.0.0.1"),
            port: env_parsed("TASKFLOW_PORT", 3000),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection
    pub timeout: u64,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            url: env_or("DATABASE_URL", "sqlite://taskflow.db?mode=rwc"),
            max_connections: env_parsed("TASKFLOW_SQLITE_MAX_CONNECTIONS", 5),
            timeout: env_parsed("DATABASE_TIMEOUT", 10),
        }
    }
}

/// Upper bound on `TASKFLOW_SESSION_DAYS`
pub const MAX_SESSION_DAYS: i64 = 3650;

/// Session cookie configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// HMAC secret used to sign the session token. Never serialized.
    #[serde(skip_serializing, default)]
    pub secret: String,
    /// Adds the `Secure` attribute to the session cookie
    pub secure_cookies: bool,
    /// Lifetime of a session token and of a remembered cookie
    pub max_age_days: i64,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env_opt("SESSION_SECRET").unwrap_or_default(),
            secure_cookies: env_bool("TASKFLOW_SECURE_COOKIES", false),
            max_age_days: env_parsed("TASKFLOW_SESSION_DAYS", 7),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self {
            level: env_or("TASKFLOW_LOG_LEVEL", "info"),
        }
    }
}
