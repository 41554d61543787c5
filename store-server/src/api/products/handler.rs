//! Product API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Product, ProductCreate, ProductUpdate, StockUpdate};

use crate::core::ServerState;
use crate::db::repository::product as product_repo;
use crate::utils::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_URL_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// GET /api/products — catalog with live stock counts
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let products = product_repo::find_all(&state.pool).await?;
    Ok(Json(products))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Product>> {
    let product = product_repo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {id} not found")))?;
    Ok(Json(product))
}

/// POST /api/products — create a catalog product
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<Json<Product>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_DESCRIPTION_LEN)?;
    validate_optional_text(&payload.image, "image", MAX_URL_LEN)?;
    validate_optional_text(&payload.category, "category", MAX_NAME_LEN)?;

    let product = product_repo::create(&state.pool, payload).await?;
    tracing::info!(product_id = product.id, name = %product.name, "Product created");
    Ok(Json(product))
}

/// PATCH /api/products/{id} — partial update; a stock change also
/// recomputes `inStock`
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<Product>> {
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_DESCRIPTION_LEN)?;
    validate_optional_text(&payload.image, "image", MAX_URL_LEN)?;
    validate_optional_text(&payload.category, "category", MAX_NAME_LEN)?;

    let product = product_repo::update(&state.pool, id, payload).await?;
    Ok(Json(product))
}

/// PATCH /api/products/{id}/stock — administrative absolute stock
/// write (manual correction, not part of checkout)
pub async fn set_stock(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<StockUpdate>,
) -> AppResult<Json<Product>> {
    let product = product_repo::set_stock(&state.pool, id, payload.stock).await?;
    tracing::info!(
        product_id = id,
        stock = product.stock,
        in_stock = product.in_stock,
        "Stock set"
    );
    Ok(Json(product))
}

/// DELETE /api/products/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    product_repo::delete(&state.pool, id).await?;
    Ok(Json(true))
}
