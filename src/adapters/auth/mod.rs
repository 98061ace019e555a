//! Authentication adapters.
//!
//! Implementations of the identity ports:
//!
//! - `jwt` - HS256 JWT issuance and validation
//! - `password` - bcrypt password hashing
//! - `mock` - Test implementations that don't require real crypto

mod jwt;
mod mock;
mod password;

pub use jwt::JwtAuthService;
pub use mock::MockSessionValidator;
pub use password::BcryptPasswordHasher;
