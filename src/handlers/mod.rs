pub mod products;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

// ─── Unified error type ──────────────────────────────────────────

/// Every failure a handler or middleware can surface. The `IntoResponse`
/// impl is the terminal error translator: it logs the failure and emits a
/// single `{"error": message}` JSON body with the matching status code.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Validation(String),
    Unauthorized(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        println!("  \x1b[31m✗ {}\x1b[0m  {message}", status.as_u16());

        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}
