//! JWT adapter for credential issuance and validation.
//!
//! Implements the `TokenIssuer` and `SessionValidator` ports with HS256
//! JWTs. Validation checks signature and expiry, then confirms the bound
//! user still exists - a token for a deleted account is as invalid as a
//! forged one.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, Timestamp, UserId};
use crate::ports::{SessionValidator, TokenIssuer, UserRepository};

/// Claims carried by issued tokens.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// The user id the credential is bound to.
    sub: String,
    /// Issued-at, Unix seconds.
    iat: u64,
    /// Expiry, Unix seconds.
    exp: u64,
}

/// HS256 JWT implementation of the identity ports.
pub struct JwtAuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl: Duration,
    users: Arc<dyn UserRepository>,
}

impl JwtAuthService {
    /// Creates a new JWT service from the configured signing secret.
    pub fn new(secret: &SecretString, token_ttl: Duration, users: Arc<dyn UserRepository>) -> Self {
        let secret_bytes = secret.expose_secret().as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(secret_bytes),
            decoding_key: DecodingKey::from_secret(secret_bytes),
            token_ttl,
            users,
        }
    }
}

impl TokenIssuer for JwtAuthService {
    fn issue(&self, user_id: &UserId) -> Result<String, AuthError> {
        let now = Timestamp::now().as_unix_secs();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now,
            exp: now + self.token_ttl.as_secs(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::service_error(format!("token signing failed: {}", e)))
    }
}

#[async_trait]
impl SessionValidator for JwtAuthService {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let validation = Validation::new(Algorithm::HS256);
        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            }
        })?;

        let user_id: UserId = data
            .claims
            .sub
            .parse()
            .map_err(|_| AuthError::InvalidToken)?;

        let user = self
            .users
            .find_by_id(&user_id)
            .await
            .map_err(|e| AuthError::service_error(e.to_string()))?
            .ok_or(AuthError::UserNotFound)?;

        Ok(AuthenticatedUser::new(user.id, user.email))
    }
}
