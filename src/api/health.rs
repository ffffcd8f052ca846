//! Health check endpoints

use axum::extract::State;

use crate::{error::AppResult, AppState};

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = String)
    )
)]
pub async fn health_check() -> &'static str {
    "up and running!"
}

/// Readiness check endpoint (checks database connectivity)
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service is ready", body = String)
    )
)]
pub async fn readiness_check(State(state): State<AppState>) -> AppResult<&'static str> {
    sqlx::query("SELECT 1")
        .execute(&state.services.repository.pool)
        .await?;
    Ok("ready")
}
