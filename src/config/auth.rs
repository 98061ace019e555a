//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Authentication configuration (JWT issuance and verification)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing secret for issued tokens
    pub jwt_secret: SecretString,

    /// Issued token lifetime in seconds
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: u64,

    /// bcrypt cost factor for password hashing
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    /// Get the token lifetime as a Duration
    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_secs)
    }

    /// Validate authentication configuration
    ///
    /// In production, requires a signing secret of at least 32 bytes.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.jwt_secret.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("JWT_SECRET"));
        }
        if *environment == Environment::Production && self.jwt_secret.expose_secret().len() < 32 {
            return Err(ValidationError::JwtSecretTooShort);
        }
        if self.token_ttl_secs == 0 {
            return Err(ValidationError::InvalidTokenLifetime);
        }
        Ok(())
    }
}

/// Default token lifetime: 7 days, matching the session length the
/// frontend expects.
fn default_token_ttl() -> u64 {
    7 * 24 * 60 * 60
}

fn default_bcrypt_cost() -> u32 {
    10
}
