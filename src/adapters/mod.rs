//! Adapters - concrete implementations of the ports.
//!
//! - `auth` - JWT / bcrypt identity adapters and test mocks
//! - `http` - axum REST surface
//! - `memory` - in-memory stores for tests
//! - `postgres` - sqlx persistence adapters

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
