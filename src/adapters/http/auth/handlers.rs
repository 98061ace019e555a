//! HTTP handlers for identity endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::auth::{
    GetCurrentUserHandler, GetCurrentUserQuery, LoginUserCommand, LoginUserHandler,
    RegisterUserCommand, RegisterUserHandler,
};
use crate::domain::user::UserError;

use super::dto::{AuthEnvelope, LoginRequest, RegisterRequest, UserEnvelope};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AuthHandlers {
    register_handler: Arc<RegisterUserHandler>,
    login_handler: Arc<LoginUserHandler>,
    me_handler: Arc<GetCurrentUserHandler>,
}

impl AuthHandlers {
    pub fn new(
        register_handler: Arc<RegisterUserHandler>,
        login_handler: Arc<LoginUserHandler>,
        me_handler: Arc<GetCurrentUserHandler>,
    ) -> Self {
        Self {
            register_handler,
            login_handler,
            me_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/auth/register - Create an account
pub async fn register(
    State(handlers): State<AuthHandlers>,
    Json(req): Json<RegisterRequest>,
) -> Response {
    let cmd = RegisterUserCommand {
        email: req.email,
        password: req.password,
        first_name: req.first_name,
        last_name: req.last_name,
        native_language: req.native_language,
    };

    match handlers.register_handler.handle(cmd).await {
        Ok(result) => (
            StatusCode::CREATED,
            Json(AuthEnvelope {
                message: "User created successfully".to_string(),
                user: result.user.into(),
                token: result.token,
            }),
        )
            .into_response(),
        Err(e) => handle_user_error(e),
    }
}

/// POST /api/auth/login - Exchange credentials for a token
pub async fn login(State(handlers): State<AuthHandlers>, Json(req): Json<LoginRequest>) -> Response {
    let cmd = LoginUserCommand {
        email: req.email,
        password: req.password,
    };

    match handlers.login_handler.handle(cmd).await {
        Ok(result) => (
            StatusCode::OK,
            Json(AuthEnvelope {
                message: "Login successful".to_string(),
                user: result.user.into(),
                token: result.token,
            }),
        )
            .into_response(),
        Err(e) => handle_user_error(e),
    }
}

/// GET /api/auth/me - Current account record
pub async fn me(State(handlers): State<AuthHandlers>, RequireAuth(user): RequireAuth) -> Response {
    let query = GetCurrentUserQuery { user_id: user.id };

    match handlers.me_handler.handle(query).await {
        Ok(user) => (
            StatusCode::OK,
            Json(UserEnvelope { user: user.into() }),
        )
            .into_response(),
        Err(e) => handle_user_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_user_error(error: UserError) -> Response {
    match error {
        UserError::EmailTaken => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("User already exists")),
        )
            .into_response(),
        UserError::InvalidCredentials => (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::unauthorized("Invalid credentials")),
        )
            .into_response(),
        // A valid token for a vanished account reads as a credential
        // problem, not a resource lookup.
        UserError::NotFound(_) => (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::unauthorized("User not found")),
        )
            .into_response(),
        UserError::ValidationFailed { field, message } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(format!(
                "Validation failed for {}: {}",
                field, message
            ))),
        )
            .into_response(),
        UserError::Infrastructure(msg) => {
            tracing::error!("identity infrastructure error: {}", msg);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::internal())).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    #[test]
    fn email_taken_maps_to_400() {
        let response = handle_user_error(UserError::EmailTaken);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_credentials_map_to_401() {
        let response = handle_user_error(UserError::InvalidCredentials);
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn vanished_user_maps_to_401() {
        let response = handle_user_error(UserError::NotFound(UserId::new()));
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn infrastructure_maps_to_500() {
        let response = handle_user_error(UserError::infrastructure("connection refused"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
