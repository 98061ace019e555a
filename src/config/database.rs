//! Database configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Minimum connections to maintain
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Maximum connections in the pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,

    /// Run pending migrations on startup
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

impl DatabaseConfig {
    /// Get the acquire timeout as a Duration
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    /// Validate database configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.url.starts_with("postgres://") && !self.url.starts_with("postgresql://") {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if self.min_connections > self.max_connections {
            return Err(ValidationError::InvalidPoolSize);
        }
        if self.max_connections > 100 {
            return Err(ValidationError::PoolSizeTooLarge);
        }
        Ok(())
    }
}

fn default_min_connections() -> u32 {
    1
}

fn default_max_connections() -> u32 {
    10
}

fn default_acquire_timeout() -> u64 {
    5
}

fn default_run_migrations() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(url: &str) -> DatabaseConfig {
        DatabaseConfig {
            url: url.to_string(),
            min_connections: default_min_connections(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
            run_migrations: true,
        }
    }

    #[test]
    fn postgres_url_is_accepted() {
        assert!(test_config("postgres://localhost/parlera").validate().is_ok());
        assert!(test_config("postgresql://localhost/parlera")
            .validate()
            .is_ok());
    }

    #[test]
    fn non_postgres_url_is_rejected() {
        assert!(matches!(
            test_config("mysql://localhost/parlera").validate(),
            Err(ValidationError::InvalidDatabaseUrl)
        ));
    }

    #[test]
    fn inverted_pool_bounds_are_rejected() {
        let mut config = test_config("postgres://localhost/parlera");
        config.min_connections = 20;
        config.max_connections = 10;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidPoolSize)
        ));
    }

    #[test]
    fn oversized_pool_is_rejected() {
        let mut config = test_config("postgres://localhost/parlera");
        config.max_connections = 101;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::PoolSizeTooLarge)
        ));
    }

    #[test]
    fn acquire_timeout_converts_to_duration() {
        let mut config = test_config("postgres://localhost/parlera");
        config.acquire_timeout_secs = 7;
        assert_eq!(config.acquire_timeout(), Duration::from_secs(7));
    }
}
