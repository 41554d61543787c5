//! Data models
//!
//! Shared between store-server and the storefront (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY); all timestamps are
//! Unix millis.

pub mod order;
pub mod product;

// Re-exports
pub use order::*;
pub use product::*;
