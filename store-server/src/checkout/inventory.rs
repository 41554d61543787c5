//! Stock reservation
//!
//! All-or-nothing conditional decrement of per-product stock counters.
//! Always runs on a transaction's connection; aborting the transaction
//! undoes every decrement in the batch.

use sqlx::SqliteConnection;

use crate::utils::AppError;

/// One reserved line: the authoritative product snapshot taken at
/// reservation time, plus the post-decrement count.
#[derive(Debug, Clone)]
pub struct ReservedLine {
    pub product_id: i64,
    pub name: String,
    /// Authoritative unit price, read in the same transaction
    pub price: f64,
    pub quantity: i64,
    /// Stock remaining after the decrement
    pub remaining: i64,
}

/// Reserve every `(product_id, quantity)` pair, or none of them.
///
/// Each decrement carries a `stock >= quantity` guard, so a counter
/// can never go negative even if another writer committed between our
/// snapshot read and the write lock upgrade; that race aborts the
/// batch with [`AppError::Conflict`] and the caller retries the whole
/// transaction. `in_stock` is recomputed in the same statement as the
/// decrement.
pub async fn reserve(
    conn: &mut SqliteConnection,
    requests: &[(i64, i64)],
    now: i64,
) -> Result<Vec<ReservedLine>, AppError> {
    let mut lines = Vec::with_capacity(requests.len());

    for &(product_id, quantity) in requests {
        let row = sqlx::query_as::<_, (String, f64, i64)>(
            "SELECT name, price, stock FROM product WHERE id = ?",
        )
        .bind(product_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

        let (name, price, stock) = row
            .ok_or_else(|| AppError::not_found(format!("Product {product_id} not found")))?;

        if stock < quantity {
            return Err(AppError::InsufficientStock {
                name,
                available: stock,
                requested: quantity,
            });
        }

        let result = sqlx::query(
            "UPDATE product \
             SET stock = stock - ?1, in_stock = (stock - ?1) > 0, updated_at = ?2 \
             WHERE id = ?3 AND stock >= ?1",
        )
        .bind(quantity)
        .bind(now)
        .bind(product_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AppError::conflict(format!(
                "Stock for product {product_id} changed during checkout"
            )));
        }

        tracing::debug!(product_id, quantity, remaining = stock - quantity, "Reserved stock");

        lines.push(ReservedLine {
            product_id,
            name,
            price,
            quantity,
            remaining: stock - quantity,
        });
    }

    Ok(lines)
}
