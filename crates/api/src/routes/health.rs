use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Greeting naming the service.
    pub message: String,
    /// Configured application version.
    pub version: String,
    /// `"healthy"` or `"degraded"`.
    pub status: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
}

/// GET / and GET /health -- returns service and database health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = taskapi_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "healthy" } else { "degraded" };

    Json(HealthResponse {
        message: format!("Welcome to {}", state.config.app_name),
        version: state.config.app_version.clone(),
        status,
        db_healthy,
    })
}

/// Mount health check routes at the root.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health_check))
        .route("/health", get(health_check))
}
