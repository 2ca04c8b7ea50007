// src/config/mod.rs
// Central configuration for the TaskFlow server

pub mod helpers;
pub mod server;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub use server::{DatabaseConfig, LoggingConfig, MAX_SESSION_DAYS, ServerConfig, SessionConfig};

pub static CONFIG: Lazy<TaskflowConfig> = Lazy::new(TaskflowConfig::from_env);

/// Main configuration structure - composes all domain configs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskflowConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

impl TaskflowConfig {
    pub fn from_env() -> Self {
        // A missing .env is fine in production
        dotenvy::dotenv().ok();

        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            session: SessionConfig::from_env(),
            logging: LoggingConfig::from_env(),
        }
    }

    /// Validate config on startup
    pub fn validate(&self) -> Result<(), AppError> {
        if self.session.secret.is_empty() {
            return Err(AppError::Config("SESSION_SECRET must be set".to_string()));
        }
        if !(1..=MAX_SESSION_DAYS).contains(&self.session.max_age_days) {
            return Err(AppError::Config(format!(
                "TASKFLOW_SESSION_DAYS must be between 1 and {MAX_SESSION_DAYS}"
            )));
        }
        if self.database.max_connections == 0 {
            return Err(AppError::Config(
                "TASKFLOW_SQLITE_MAX_CONNECTIONS must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        self.server.bind_address()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TaskflowConfig {
        TaskflowConfig {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
                timeout: 5,
            },
            session: SessionConfig {
                secret: "s3cr3t".to_string(),
                secure_cookies: false,
                max_age_days: 7,
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
            },
        }
    }

    #[test]
    fn test_bind_address() {
        assert_eq!(sample().bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_validate_requires_secret() {
        let mut config = sample();
        assert!(config.validate().is_ok());

        config.session.secret.clear();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("SESSION_SECRET"));
    }

    #[test]
    fn test_validate_bounds_session_days() {
        let mut config = sample();

        config.session.max_age_days = 0;
        assert!(config.validate().is_err());

        config.session.max_age_days = MAX_SESSION_DAYS + 1;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("TASKFLOW_SESSION_DAYS"));

        config.session.max_age_days = MAX_SESSION_DAYS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_secret_is_not_serialized() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(!json.contains("s3cr3t"));
    }
}
