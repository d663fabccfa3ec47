use axum::{
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::handlers::AppError;
use crate::AppState;

/// Shared-secret gate for mutating routes. POST/PUT/DELETE requests must
/// carry an `x-api-key` header matching the configured key; anything else
/// short-circuits with a 401 before the handler runs. Read requests pass
/// through untouched.
pub async fn require_api_key(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let method = req.method();
    let mutating = method == Method::POST || method == Method::PUT || method == Method::DELETE;

    if mutating {
        let supplied = req
            .headers()
            .get("x-api-key")
            .and_then(|v| v.to_str().ok());

        if supplied != Some(state.config.api_key.as_str()) {
            return AppError::Unauthorized("invalid or missing API key".to_string())
                .into_response();
        }
    }

    next.run(req).await
}
