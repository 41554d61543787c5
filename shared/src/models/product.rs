//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
///
/// `in_stock` is derived state: every stock mutation recomputes it as
/// `stock > 0` in the same statement, so the two never disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub image: String,
    pub category: String,
    /// Price in currency unit (authoritative, server-held)
    pub price: f64,
    pub stock: i64,
    pub in_stock: bool,
    /// Unix millis
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    /// Defaults to "Snacks"
    pub category: Option<String>,
    pub price: f64,
    pub stock: Option<i64>,
}

/// Update product payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
}

/// Absolute stock write payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockUpdate {
    pub stock: i64,
}
