//! Standard error response shared by all HTTP resources.

use serde::Serialize;

/// Standard error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }

    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", error)
    }

    pub fn unauthorized(error: impl Into<String>) -> Self {
        Self::new("UNAUTHORIZED", error)
    }

    pub fn not_found(error: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", error)
    }

    pub fn internal() -> Self {
        Self::new("INTERNAL_ERROR", "Internal server error")
    }
}
