//! Order API Module
//!
//! Checkout, tracking reads, and staff status updates.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id).patch(handler::set_status))
        .route("/user/{user_id}", get(handler::list_by_user))
}
