use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::{dto::api::HealthDto, state::AppState};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Health check reporting server and database status.
///
/// Always answers 200; a failed database ping is reported in the body rather
/// than as an error status so load balancers can distinguish a degraded
/// backend from a dead one.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server status", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let database = match state.db.ping().await {
        Ok(()) => "connected",
        Err(_) => "disconnected",
    };

    (
        StatusCode::OK,
        Json(HealthDto {
            success: true,
            status: "OK".to_string(),
            database: database.to_string(),
            timestamp: Utc::now(),
        }),
    )
}
