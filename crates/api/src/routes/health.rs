//! Liveness probe for load balancers and the startup smoke test.
//!
//! Always answers 200; a store that cannot run `SELECT 1` only downgrades
//! `status` to `degraded`, since the index and input forms still render.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use cinequery_core::operation::Operation;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Number of query pages mounted under `/{operation}`.
    pub operations: usize,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = cinequery_db::health_check(&state.pool).await.is_ok();
    if !db_healthy {
        tracing::warn!("Health check could not reach the database");
    }

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        operations: Operation::ALL.len(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
