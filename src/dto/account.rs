use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for user registration.
///
/// Fields are optional at the deserialization layer so the service can return
/// the API's own 400 message instead of a generic deserialization failure.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request body for user login.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Account representation returned to clients. Never includes the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub subscription: String,
    pub sleep_sessions_count: i32,
    pub total_sleep_hours: f64,
    pub last_login_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Response body for successful registration or login, carrying a fresh token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponseDto {
    pub success: bool,
    pub message: String,
    pub user: UserDto,
    pub token: String,
}

/// Response body for the authenticated profile endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponseDto {
    pub success: bool,
    pub user: UserDto,
}
