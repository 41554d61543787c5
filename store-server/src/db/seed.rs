//! Sample catalog seeding
//!
//! The six-product snack catalog the storefront demo ships with.
//! Seeding clears the product table and reinserts, so it is only wired
//! to the explicit `/api/seed` route.

use sqlx::SqlitePool;

use super::repository::{RepoResult, now_millis};

struct SeedProduct {
    name: &'static str,
    price: f64,
    description: &'static str,
    image: &'static str,
    stock: i64,
}

const SAMPLE_PRODUCTS: [SeedProduct; 6] = [
    SeedProduct {
        name: "Chocolate Cookies",
        price: 25.0,
        description: "Delicious chocolate chip cookies",
        image: "https://images.unsplash.com/photo-1499636136210-6f4ee915583e?w=400&h=300&fit=crop",
        stock: 50,
    },
    SeedProduct {
        name: "Potato Chips",
        price: 20.0,
        description: "Crispy salted potato chips",
        image: "https://images.unsplash.com/photo-1566478989037-eec170784d0b?w=400&h=300&fit=crop",
        stock: 30,
    },
    SeedProduct {
        name: "Energy Bar",
        price: 35.0,
        description: "Healthy energy bar with nuts",
        image: "https://images.unsplash.com/photo-1571092918219-7950a6c9a999?w=400&h=300&fit=crop",
        stock: 25,
    },
    SeedProduct {
        name: "Instant Noodles",
        price: 15.0,
        description: "Quick and tasty instant noodles",
        image: "https://images.unsplash.com/photo-1569718212165-3a8278d5f624?w=400&h=300&fit=crop",
        stock: 40,
    },
    SeedProduct {
        name: "Fruit Juice",
        price: 30.0,
        description: "Fresh mixed fruit juice",
        image: "https://images.unsplash.com/photo-1600271886742-f049cd451bba?w=400&h=300&fit=crop",
        stock: 20,
    },
    SeedProduct {
        name: "Candy Pack",
        price: 12.0,
        description: "Assorted candy pack",
        image: "https://images.unsplash.com/photo-1575224300306-1b8da36134ec?w=400&h=300&fit=crop",
        stock: 0,
    },
];

/// Replace the product catalog with the sample snacks. Returns the
/// number of products inserted.
pub async fn seed_products(pool: &SqlitePool) -> RepoResult<u64> {
    sqlx::query("DELETE FROM product").execute(pool).await?;

    let now = now_millis();
    for product in &SAMPLE_PRODUCTS {
        sqlx::query(
            "INSERT INTO product (name, description, image, category, price, stock, in_stock, created_at, updated_at) \
             VALUES (?1, ?2, ?3, 'Snacks', ?4, ?5, ?5 > 0, ?6, ?6)",
        )
        .bind(product.name)
        .bind(product.description)
        .bind(product.image)
        .bind(product.price)
        .bind(product.stock)
        .bind(now)
        .execute(pool)
        .await?;
    }

    Ok(SAMPLE_PRODUCTS.len() as u64)
}
