//! bcrypt adapter for password hashing.

use crate::domain::foundation::AuthError;
use crate::ports::PasswordHasher;

/// bcrypt implementation of the `PasswordHasher` port.
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Creates a hasher with the configured cost factor.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plain: &str) -> Result<String, AuthError> {
        bcrypt::hash(plain, self.cost)
            .map_err(|e| AuthError::service_error(format!("password hashing failed: {}", e)))
    }

    fn verify(&self, plain: &str, hash: &str) -> Result<bool, AuthError> {
        bcrypt::verify(plain, hash)
            .map_err(|e| AuthError::service_error(format!("password verification failed: {}", e)))
    }
}
