//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{CheckoutRequest, Order, StatusUpdate};

use crate::checkout::{self, RetryPolicy};
use crate::core::ServerState;
use crate::db::repository::order as order_repo;
use crate::utils::{AppError, AppResult};

/// POST /api/orders — checkout a cart
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CheckoutRequest>,
) -> AppResult<Json<Order>> {
    let retry = RetryPolicy {
        max_retries: state.config.checkout_max_retries,
        backoff_ms: state.config.checkout_retry_backoff_ms,
    };
    let order = checkout::checkout(&state.pool, retry, payload).await?;
    Ok(Json(order))
}

/// GET /api/orders — every order, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let orders = order_repo::find_all(&state.pool).await?;
    Ok(Json(orders))
}

/// GET /api/orders/{id} — polled by the tracking page
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Order>> {
    let order = order_repo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))?;
    Ok(Json(order))
}

/// GET /api/orders/user/{user_id} — orders for one user, newest first
pub async fn list_by_user(
    State(state): State<ServerState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = order_repo::find_by_user(&state.pool, &user_id).await?;
    Ok(Json(orders))
}

/// PATCH /api/orders/{id} — set fulfillment status
///
/// Deliberately permissive: staff may set any status at any time as an
/// operational override, so off-path transitions (including out of
/// terminal states) are logged rather than rejected. Inventory is
/// never touched here — cancelling does not restock.
pub async fn set_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<StatusUpdate>,
) -> AppResult<Json<Order>> {
    let current = order_repo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))?;

    if !current.status.can_transition(payload.status) {
        tracing::warn!(
            order_id = id,
            from = %current.status,
            to = %payload.status,
            "Off-path status override"
        );
    }

    let rows = order_repo::set_status(&state.pool, id, payload.status).await?;
    if rows == 0 {
        return Err(AppError::not_found(format!("Order {id} not found")));
    }

    let order = order_repo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))?;
    tracing::info!(order_id = id, status = %order.status, "Order status updated");
    Ok(Json(order))
}
