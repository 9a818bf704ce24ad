use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    controller::param::PaginationParam,
    dto::{
        api::ErrorDto,
        session::{CreateSleepSessionDto, SessionCreatedDto, SessionListDto, SleepSessionDto},
    },
    error::AppError,
    middleware::auth::AuthGuard,
    model::session::{CreateSleepSessionParams, SleepSession},
    service::session::SleepSessionService,
    state::AppState,
};

/// Tag for grouping sleep session endpoints in OpenAPI documentation
pub static SESSION_TAG: &str = "sleep_session";

/// Log a sleep session for the authenticated user.
///
/// Quality defaults to `min(100, duration * 10)` when omitted and the sleep
/// score is derived from quality. The account's session counters update in
/// the same transaction as the insert.
///
/// # Access Control
/// - User token required; sessions are always created for the token's account
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Session data (duration, date, optional quality, stages, sounds)
///
/// # Returns
/// - `201 Created` - Session stored
/// - `400 Bad Request` - Missing or out-of-range fields
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/sleep-sessions",
    tag = SESSION_TAG,
    request_body = CreateSleepSessionDto,
    responses(
        (status = 201, description = "Session stored", body = SessionCreatedDto),
        (status = 400, description = "Missing or out-of-range fields", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateSleepSessionDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens).require_user(&headers)?;

    let session = SleepSessionService::new(&state.db)
        .create(claims.account_id()?, CreateSleepSessionParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SessionCreatedDto {
            success: true,
            message: "Sleep session created successfully".to_string(),
            session: session.into_dto(),
        }),
    ))
}

/// Get a user's sleep session history, newest first.
///
/// The path id must match the authenticated account; users can only read
/// their own history.
///
/// # Access Control
/// - User token required; path id must match the token's account
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `user_id` - Account id from the path
/// - `param` - Pagination (limit, offset)
///
/// # Returns
/// - `200 OK` - Page of sessions and the total count
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Path id does not match the token's account
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/sleep-sessions/{user_id}",
    tag = SESSION_TAG,
    params(
        ("user_id" = i32, Path, description = "Account id owning the sessions"),
        PaginationParam
    ),
    responses(
        (status = 200, description = "Page of sessions", body = SessionListDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_sessions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
    Query(param): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require_owner(&headers, user_id)?;

    let (sessions, total) = SleepSessionService::new(&state.db)
        .list(user_id, param.limit, param.offset)
        .await?;

    let sessions: Vec<SleepSessionDto> =
        sessions.into_iter().map(SleepSession::into_dto).collect();

    Ok((
        StatusCode::OK,
        Json(SessionListDto {
            success: true,
            sessions,
            total,
        }),
    ))
}
