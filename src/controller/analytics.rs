use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    controller::param::AnalyticsParam,
    dto::{analytics::AnalyticsResponseDto, api::ErrorDto},
    error::AppError,
    middleware::auth::AuthGuard,
    model::analytics::Period,
    service::analytics::AnalyticsService,
    state::AppState,
};

/// Tag for grouping analytics endpoints in OpenAPI documentation
pub static ANALYTICS_TAG: &str = "analytics";

/// Get aggregated sleep analytics for the authenticated user.
///
/// Aggregates the account's sessions over the requested window: totals,
/// averages, stage distribution, per-label sound counts, a seven-day daily
/// trend, and heuristic insights. Unrecognized period values fall back to
/// thirty days.
///
/// # Access Control
/// - User token required; always scoped to the token's account
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `param` - Window selection (`period` = `7d`, `30d`, or `90d`)
///
/// # Returns
/// - `200 OK` - Analytics for the window
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/sleep-analytics",
    tag = ANALYTICS_TAG,
    params(AnalyticsParam),
    responses(
        (status = 200, description = "Analytics for the window", body = AnalyticsResponseDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_analytics(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(param): Query<AnalyticsParam>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens).require_user(&headers)?;

    let period = Period::parse(param.period.as_deref());
    let analytics = AnalyticsService::new(&state.db)
        .summarize(claims.account_id()?, period)
        .await?;

    Ok((
        StatusCode::OK,
        Json(AnalyticsResponseDto {
            success: true,
            analytics: analytics.into_dto(),
        }),
    ))
}
