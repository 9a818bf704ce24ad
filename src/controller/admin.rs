use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        admin::{
            AdminLoginDto, AdminLoginResponseDto, AdminSoundListDto, AdminUserListDto,
            DashboardDto,
        },
        api::ErrorDto,
        sound::SoundDto,
    },
    error::AppError,
    middleware::auth::AuthGuard,
    model::{account::Account, sound::Sound},
    service::admin::{AdminLoginParams, AdminService},
    state::AppState,
};

/// Tag for grouping admin console endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Log in to the admin console.
///
/// Verifies the configured operator credentials and issues a twenty-four-hour
/// admin token. Admin tokens are signed with a separate secret and never
/// verify as user tokens.
///
/// # Access Control
/// - Public (credential-gated)
///
/// # Arguments
/// - `state` - Application state carrying the configured admin credentials
/// - `payload` - Login data (email, password)
///
/// # Returns
/// - `200 OK` - Credentials verified, admin token issued
/// - `400 Bad Request` - Missing fields
/// - `401 Unauthorized` - Credential mismatch
/// - `500 Internal Server Error` - Token signing failure
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = ADMIN_TAG,
    request_body = AdminLoginDto,
    responses(
        (status = 200, description = "Admin token issued", body = AdminLoginResponseDto),
        (status = 400, description = "Missing fields", body = ErrorDto),
        (status = 401, description = "Invalid admin credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_login(
    State(state): State<AppState>,
    Json(payload): Json<AdminLoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let email = AdminService::new(&state).verify_login(AdminLoginParams {
        email: payload.email,
        password: payload.password,
    })?;

    let token = state.tokens.issue_admin(&email)?;

    Ok((
        StatusCode::OK,
        Json(AdminLoginResponseDto {
            success: true,
            message: "Admin login successful".to_string(),
            token,
        }),
    ))
}

/// List every user account with per-tier counts.
///
/// # Access Control
/// - Admin token required
///
/// # Returns
/// - `200 OK` - All accounts newest first plus tier totals
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Token lacks the admin role
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All accounts with tier counts", body = AdminUserListDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require_admin(&headers)?;

    let (accounts, counts) = AdminService::new(&state).list_users().await?;

    Ok((
        StatusCode::OK,
        Json(AdminUserListDto {
            success: true,
            total_users: counts.total,
            premium_users: counts.premium,
            free_users: counts.free,
            users: accounts.into_iter().map(Account::into_dto).collect(),
        }),
    ))
}

/// List the full sound library with its premium split.
///
/// Unlike the public listing this includes inactive sounds.
///
/// # Access Control
/// - Admin token required
///
/// # Returns
/// - `200 OK` - All sounds newest first plus premium totals
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Token lacks the admin role
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/sounds",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Full sound library with premium counts", body = AdminSoundListDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_sounds(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require_admin(&headers)?;

    let (sounds, counts) = AdminService::new(&state).list_sounds().await?;

    let sounds: Vec<SoundDto> = sounds.into_iter().map(Sound::into_dto).collect();

    Ok((
        StatusCode::OK,
        Json(AdminSoundListDto {
            success: true,
            total_sounds: counts.total,
            premium_sounds: counts.premium,
            free_sounds: counts.free,
            sounds,
        }),
    ))
}

/// Get the admin dashboard counters.
///
/// # Access Control
/// - Admin token required
///
/// # Returns
/// - `200 OK` - Aggregate counters (users, sessions, sounds, plans)
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Token lacks the admin role
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Dashboard counters", body = DashboardDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require_admin(&headers)?;

    let stats = AdminService::new(&state).dashboard().await?;

    Ok((
        StatusCode::OK,
        Json(DashboardDto {
            success: true,
            stats: stats.into_dto(),
        }),
    ))
}
