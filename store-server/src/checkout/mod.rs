//! Checkout: turning a submitted cart into a persisted order.
//!
//! Authoritative price lookup, stock reservation, and the order insert
//! all run inside one SQLite write transaction: a failure at any point
//! leaves both the stock counters and the order ledger untouched.
//! SQLite admits a single writer at a time, so concurrent checkouts
//! serialize at the store; a checkout that loses a race is retried a
//! bounded number of times with backoff before the error surfaces.

pub mod inventory;

pub use inventory::{ReservedLine, reserve};

use std::time::Duration;

use shared::models::{CartItem, CheckoutRequest, Order, OrderItem, OrderStatus};
use sqlx::SqlitePool;

use crate::db::repository::{self as repository, now_millis};
use crate::utils::validation::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

/// Retry policy for contended checkouts. Backoff grows linearly with
/// the attempt number.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff_ms: u64,
}

/// Convert a submitted cart into a committed order.
///
/// Client-sent `name`/`price` fields are ignored; the snapshot and the
/// total come from the product table, read in the same transaction
/// that decrements stock.
pub async fn checkout(
    pool: &SqlitePool,
    retry: RetryPolicy,
    request: CheckoutRequest,
) -> AppResult<Order> {
    validate(&request)?;
    let requests = coalesce(&request.items);

    let mut attempt = 0;
    loop {
        match try_checkout(pool, &request, &requests).await {
            Err(e) if e.is_transient() && attempt < retry.max_retries => {
                attempt += 1;
                tracing::warn!(attempt, error = %e, "Checkout hit contention, retrying");
                tokio::time::sleep(Duration::from_millis(retry.backoff_ms * attempt as u64)).await;
            }
            other => return other,
        }
    }
}

/// One attempt: reserve + insert in a single transaction.
async fn try_checkout(
    pool: &SqlitePool,
    request: &CheckoutRequest,
    requests: &[(i64, i64)],
) -> AppResult<Order> {
    let now = now_millis();
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    let lines = inventory::reserve(&mut tx, requests, now).await?;

    let items: Vec<OrderItem> = lines
        .into_iter()
        .map(|line| OrderItem {
            product_id: line.product_id,
            name: line.name,
            price: line.price,
            quantity: line.quantity,
        })
        .collect();

    let total_amount: f64 = items
        .iter()
        .map(|item| item.price * item.quantity as f64)
        .sum();

    let order_id = repository::order::insert_with_items(
        &mut tx,
        &request.user_id,
        &request.hostel_name,
        &request.room_number,
        total_amount,
        &items,
        now,
    )
    .await?;

    // Stock decrement and ledger insert commit (or roll back) together.
    tx.commit()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    tracing::info!(
        order_id,
        user_id = %request.user_id,
        total_amount,
        "Checkout committed"
    );

    Ok(Order {
        id: order_id,
        user_id: request.user_id.clone(),
        items,
        hostel_name: request.hostel_name.clone(),
        room_number: request.room_number.clone(),
        total_amount,
        status: OrderStatus::Pending,
        created_at: now,
        updated_at: now,
    })
}

fn validate(request: &CheckoutRequest) -> AppResult<()> {
    validate_required_text(&request.user_id, "userId", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&request.room_number, "roomNumber", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&request.hostel_name, "hostelName", MAX_NAME_LEN)?;

    if request.items.is_empty() {
        return Err(AppError::validation("Cart must not be empty"));
    }
    for item in &request.items {
        if item.quantity < 1 {
            return Err(AppError::validation(format!(
                "Quantity for product {} must be at least 1",
                item.product_id
            )));
        }
    }
    Ok(())
}

/// Sum quantities per product so each stock counter is decremented
/// exactly once per checkout, preserving first-seen order.
fn coalesce(items: &[CartItem]) -> Vec<(i64, i64)> {
    let mut merged: Vec<(i64, i64)> = Vec::new();
    for item in items {
        match merged.iter_mut().find(|(id, _)| *id == item.product_id) {
            Some((_, quantity)) => *quantity += item.quantity,
            None => merged.push((item.product_id, item.quantity)),
        }
    }
    merged
}
