//! HTTP routes for identity endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{login, me, register, AuthHandlers};

/// Creates the auth router with all endpoints.
pub fn auth_routes(handlers: AuthHandlers) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me))
        .with_state(handlers)
}
