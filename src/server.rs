use axum::{
    middleware as axum_mw,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::handlers::products;
use crate::middleware::{auth, logging};
use crate::AppState;

/// Builds the full Axum `Router` with all routes and middleware. Per
/// request the pipeline runs logging → auth gate → handler; errors fall
/// through to `AppError::into_response`.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // ── Welcome ─────────────────────────────────────────────
        .route("/", get(products::root))
        // ── Product collection ──────────────────────────────────
        .route(
            "/api/products",
            get(products::list_products).post(products::create_product),
        )
        // ── Derived views (before :id so the literal paths win) ──
        .route("/api/products/search", get(products::search_products))
        .route("/api/products/stats", get(products::product_stats))
        // ── Single product ──────────────────────────────────────
        .route(
            "/api/products/:id",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        // ── Provide shared state to all routes above ────────────
        .with_state(state.clone())
        // ── Global middleware (applied bottom-up) ───────────────
        .layer(axum_mw::from_fn_with_state(state, auth::require_api_key))
        .layer(axum_mw::from_fn(logging::log_requests))
        .layer(CorsLayer::permissive())
}
