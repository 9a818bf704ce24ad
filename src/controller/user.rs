use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        account::{AuthResponseDto, LoginDto, ProfileResponseDto, RegisterDto},
        api::ErrorDto,
    },
    error::AppError,
    middleware::auth::AuthGuard,
    service::account::{AccountService, LoginParams, RegisterParams},
    state::AppState,
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new user account.
///
/// Creates the account on the free tier with zeroed sleep statistics and
/// returns a fresh bearer token alongside the created user.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Registration data (name, email, password)
///
/// # Returns
/// - `201 Created` - Account created, token issued
/// - `400 Bad Request` - Missing fields or invalid email format
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/users/register",
    tag = USER_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = AuthResponseDto),
        (status = 400, description = "Missing fields or invalid email format", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let account = AccountService::new(&state.db)
        .register(RegisterParams {
            name: payload.name,
            email: payload.email,
            password: payload.password,
        })
        .await?;

    let token = state.tokens.issue_user(&account)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponseDto {
            success: true,
            message: "User registered successfully".to_string(),
            user: account.into_dto(),
            token,
        }),
    ))
}

/// Log in with email and password.
///
/// Verifies the credentials, refreshes the account's last login timestamp,
/// and returns a fresh bearer token.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Login data (email, password)
///
/// # Returns
/// - `200 OK` - Credentials verified, token issued
/// - `400 Bad Request` - Missing fields
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/users/login",
    tag = USER_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Credentials verified", body = AuthResponseDto),
        (status = 400, description = "Missing fields", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let account = AccountService::new(&state.db)
        .login(LoginParams {
            email: payload.email,
            password: payload.password,
        })
        .await?;

    let token = state.tokens.issue_user(&account)?;

    Ok((
        StatusCode::OK,
        Json(AuthResponseDto {
            success: true,
            message: "Login successful".to_string(),
            user: account.into_dto(),
            token,
        }),
    ))
}

/// Get the authenticated user's profile.
///
/// # Access Control
/// - User token required
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
///
/// # Returns
/// - `200 OK` - Profile of the token's account
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Token subject no longer exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/profile",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Profile of the authenticated user", body = ProfileResponseDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens).require_user(&headers)?;

    let account = AccountService::new(&state.db)
        .profile(claims.account_id()?)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ProfileResponseDto {
            success: true,
            user: account.into_dto(),
        }),
    ))
}
