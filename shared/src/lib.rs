//! Shared data models for the hostel snack storefront.
//!
//! Used by the store server and, over JSON, by the web storefront.
//! Wire format is camelCase to match the existing clients; DB row
//! types derive `sqlx::FromRow` behind the `db` feature.

pub mod models;

pub use models::*;
