//! Product Repository

use shared::models::{Product, ProductCreate, ProductUpdate};
use sqlx::SqlitePool;

use super::{RepoError, RepoResult, now_millis};

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Product>> {
    let products =
        sqlx::query_as::<_, Product>("SELECT * FROM product ORDER BY category, name")
            .fetch_all(pool)
            .await?;
    Ok(products)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Product>> {
    let product = sqlx::query_as::<_, Product>("SELECT * FROM product WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(product)
}

pub async fn create(pool: &SqlitePool, data: ProductCreate) -> RepoResult<Product> {
    if data.price < 0.0 {
        return Err(RepoError::Validation("price must be non-negative".into()));
    }
    let stock = data.stock.unwrap_or(0);
    if stock < 0 {
        return Err(RepoError::Validation("stock must be non-negative".into()));
    }

    let now = now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO product (name, description, image, category, price, stock, in_stock, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6 > 0, ?7, ?7) \
         RETURNING id",
    )
    .bind(&data.name)
    .bind(data.description.unwrap_or_default())
    .bind(data.image.unwrap_or_default())
    .bind(data.category.unwrap_or_else(|| "Snacks".into()))
    .bind(data.price)
    .bind(stock)
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create product".into()))
}

/// Partial update. A stock change recomputes `in_stock` inside the
/// same statement so the two fields never diverge.
pub async fn update(pool: &SqlitePool, id: i64, data: ProductUpdate) -> RepoResult<Product> {
    if let Some(price) = data.price
        && price < 0.0
    {
        return Err(RepoError::Validation("price must be non-negative".into()));
    }
    if let Some(stock) = data.stock
        && stock < 0
    {
        return Err(RepoError::Validation("stock must be non-negative".into()));
    }

    let rows = sqlx::query(
        "UPDATE product SET \
             name = COALESCE(?1, name), \
             description = COALESCE(?2, description), \
             image = COALESCE(?3, image), \
             category = COALESCE(?4, category), \
             price = COALESCE(?5, price), \
             stock = COALESCE(?6, stock), \
             in_stock = COALESCE(?6, stock) > 0, \
             updated_at = ?7 \
         WHERE id = ?8",
    )
    .bind(data.name)
    .bind(data.description)
    .bind(data.image)
    .bind(data.category)
    .bind(data.price)
    .bind(data.stock)
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Product {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Product {id} not found")))
}

/// Administrative absolute stock write. Last-writer-wins by contract;
/// this is a manual correction tool, not part of checkout.
pub async fn set_stock(pool: &SqlitePool, id: i64, stock: i64) -> RepoResult<Product> {
    if stock < 0 {
        return Err(RepoError::Validation("stock must be non-negative".into()));
    }

    let rows = sqlx::query(
        "UPDATE product SET stock = ?1, in_stock = ?1 > 0, updated_at = ?2 WHERE id = ?3",
    )
    .bind(stock)
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Product {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Product {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM product WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Product {id} not found")));
    }
    Ok(true)
}
