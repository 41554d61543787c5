//! Seed route — reset the catalog to the sample snack products

use axum::{Json, Router, extract::State, routing::post};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::seed;
use crate::utils::AppResult;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/seed", post(run_seed))
}

#[derive(Serialize)]
pub struct SeedResponse {
    inserted: u64,
}

/// POST /api/seed — wipe and reseed the product catalog
pub async fn run_seed(State(state): State<ServerState>) -> AppResult<Json<SeedResponse>> {
    let inserted = seed::seed_products(&state.pool).await?;
    tracing::info!(inserted, "Product catalog reseeded");
    Ok(Json(SeedResponse { inserted }))
}
