use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::store::{Product, ProductDraft};
use crate::AppState;

use super::AppError;

// ─── Request / response types ────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub data: Vec<Product>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub total: usize,
    pub data: Vec<Product>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub product: Product,
}

// ─── GET / ───────────────────────────────────────────────────────

pub async fn root() -> &'static str {
    "Welcome to the Product API"
}

// ─── GET /api/products ───────────────────────────────────────────

pub async fn list_products(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Json<ListResponse> {
    let page = state
        .store
        .read()
        .list(query.category.as_deref(), query.page, query.limit);

    Json(ListResponse {
        total: page.total,
        page: page.page,
        limit: page.limit,
        data: page.items,
    })
}

// ─── GET /api/products/:id ───────────────────────────────────────

pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    let store = state.store.read();
    let product = store
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("product '{id}' not found")))?;
    Ok(Json(product.clone()))
}

// ─── POST /api/products ──────────────────────────────────────────

pub async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let draft = draft_from_body(&body)?;
    let product = state.store.write().create(draft);
    Ok((StatusCode::CREATED, Json(product)))
}

// ─── PUT /api/products/:id ───────────────────────────────────────

pub async fn update_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Product>, AppError> {
    let draft = draft_from_body(&body)?;
    let product = state
        .store
        .write()
        .replace(&id, draft)
        .ok_or_else(|| AppError::NotFound(format!("product '{id}' not found")))?;
    Ok(Json(product))
}

// ─── DELETE /api/products/:id ────────────────────────────────────

pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let product = state
        .store
        .write()
        .delete(&id)
        .ok_or_else(|| AppError::NotFound(format!("product '{id}' not found")))?;
    Ok(Json(DeleteResponse {
        message: "product deleted".to_string(),
        product,
    }))
}

// ─── GET /api/products/search ────────────────────────────────────

pub async fn search_products(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let hits = state.store.read().search(query.name.as_deref().unwrap_or(""));
    Json(SearchResponse {
        total: hits.len(),
        data: hits,
    })
}

// ─── GET /api/products/stats ─────────────────────────────────────

pub async fn product_stats(State(state): State<Arc<AppState>>) -> Json<HashMap<String, usize>> {
    Json(state.store.read().stats())
}

// ─── Write-payload validation ────────────────────────────────────

/// Checks the raw write body field by field so a missing or wrong-typed
/// field is a 400 validation failure, not a body-deserialization rejection.
fn draft_from_body(body: &Value) -> Result<ProductDraft, AppError> {
    Ok(ProductDraft {
        name: require_string(body, "name")?,
        description: require_string(body, "description")?,
        price: body
            .get("price")
            .and_then(Value::as_f64)
            .ok_or_else(|| AppError::Validation("'price' must be a number".to_string()))?,
        category: require_string(body, "category")?,
        in_stock: body
            .get("inStock")
            .and_then(Value::as_bool)
            .ok_or_else(|| AppError::Validation("'inStock' must be a boolean".to_string()))?,
    })
}

fn require_string(body: &Value, field: &str) -> Result<String, AppError> {
    match body.get(field).and_then(Value::as_str) {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        _ => Err(AppError::Validation(format!(
            "'{field}' must be a non-empty string"
        ))),
    }
}

// ─── Tests ───────────────────────────────────────────────────────
