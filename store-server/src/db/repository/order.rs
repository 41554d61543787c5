//! Order Repository
//!
//! The order header is written once by checkout (inside its
//! transaction); afterwards only `status`/`updated_at` change.

use shared::models::{Order, OrderItem, OrderStatus};
use sqlx::{SqliteConnection, SqlitePool};

use super::{RepoResult, now_millis};

const HEADER_COLUMNS: &str =
    "id, user_id, hostel_name, room_number, total_amount, status, created_at, updated_at";

/// Insert the order header and its item snapshot rows. Runs on the
/// caller's connection so checkout can keep it inside the same
/// transaction as the stock decrement.
pub async fn insert_with_items(
    conn: &mut SqliteConnection,
    user_id: &str,
    hostel_name: &str,
    room_number: &str,
    total_amount: f64,
    items: &[OrderItem],
    now: i64,
) -> RepoResult<i64> {
    let order_id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO \"order\" (user_id, hostel_name, room_number, total_amount, status, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6) \
         RETURNING id",
    )
    .bind(user_id)
    .bind(hostel_name)
    .bind(room_number)
    .bind(total_amount)
    .bind(OrderStatus::Pending)
    .bind(now)
    .fetch_one(&mut *conn)
    .await?;

    for (line_no, item) in items.iter().enumerate() {
        sqlx::query(
            "INSERT INTO order_item (order_id, product_id, name, price, quantity, line_no) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(order_id)
        .bind(item.product_id)
        .bind(&item.name)
        .bind(item.price)
        .bind(item.quantity)
        .bind(line_no as i64)
        .execute(&mut *conn)
        .await?;
    }

    Ok(order_id)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Order>> {
    let order = sqlx::query_as::<_, Order>(&format!(
        "SELECT {HEADER_COLUMNS} FROM \"order\" WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    match order {
        Some(mut order) => {
            order.items = fetch_items(pool, order.id).await?;
            Ok(Some(order))
        }
        None => Ok(None),
    }
}

/// All orders for one user, newest first.
pub async fn find_by_user(pool: &SqlitePool, user_id: &str) -> RepoResult<Vec<Order>> {
    let orders = sqlx::query_as::<_, Order>(&format!(
        "SELECT {HEADER_COLUMNS} FROM \"order\" WHERE user_id = ? ORDER BY created_at DESC, id DESC"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    attach_items(pool, orders).await
}

/// Every order in the ledger, newest first.
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Order>> {
    let orders = sqlx::query_as::<_, Order>(&format!(
        "SELECT {HEADER_COLUMNS} FROM \"order\" ORDER BY created_at DESC, id DESC"
    ))
    .fetch_all(pool)
    .await?;
    attach_items(pool, orders).await
}

/// Set the lifecycle status. Returns the number of rows touched; zero
/// means the order does not exist. Setting the current status again is
/// a plain (successful) update.
pub async fn set_status(pool: &SqlitePool, id: i64, status: OrderStatus) -> RepoResult<u64> {
    let rows = sqlx::query("UPDATE \"order\" SET status = ?1, updated_at = ?2 WHERE id = ?3")
        .bind(status)
        .bind(now_millis())
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected())
}

async fn fetch_items(pool: &SqlitePool, order_id: i64) -> RepoResult<Vec<OrderItem>> {
    let items = sqlx::query_as::<_, OrderItem>(
        "SELECT product_id, name, price, quantity FROM order_item \
         WHERE order_id = ? ORDER BY line_no",
    )
    .bind(order_id)
    .fetch_all(pool)
    .await?;
    Ok(items)
}

async fn attach_items(pool: &SqlitePool, mut orders: Vec<Order>) -> RepoResult<Vec<Order>> {
    for order in &mut orders {
        order.items = fetch_items(pool, order.id).await?;
    }
    Ok(orders)
}
