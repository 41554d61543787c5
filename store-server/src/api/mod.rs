//! API routes
//!
//! # Structure
//!
//! - [`health`] — health check
//! - [`products`] — catalog and stock management
//! - [`orders`] — checkout, tracking reads, status updates
//! - [`seed`] — sample catalog reset

pub mod health;
pub mod orders;
pub mod products;
pub mod seed;

use std::time::Duration;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Build the full application router.
pub fn router(state: ServerState) -> Router {
    let timeout = Duration::from_millis(state.config.request_timeout_ms);

    Router::new()
        .merge(health::router())
        .merge(products::router())
        .merge(orders::router())
        .merge(seed::router())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
