use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::{account::UserDto, sound::SoundDto};

/// Request body for admin login against the configured credentials.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminLoginDto {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Response body for successful admin login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminLoginResponseDto {
    pub success: bool,
    pub message: String,
    pub token: String,
}

/// Admin listing of all accounts with per-tier counts.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserListDto {
    pub success: bool,
    pub total_users: u64,
    pub premium_users: u64,
    pub free_users: u64,
    pub users: Vec<UserDto>,
}

/// Admin listing of the full sound library with premium counts.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminSoundListDto {
    pub success: bool,
    pub total_sounds: u64,
    pub premium_sounds: u64,
    pub free_sounds: u64,
    pub sounds: Vec<SoundDto>,
}

/// Aggregate counters shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDto {
    pub total_users: u64,
    pub premium_users: u64,
    pub total_sessions: u64,
    pub today_sessions: u64,
    pub active_sounds: u64,
    pub active_plans: u64,
}

/// Response body for the admin dashboard endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDto {
    pub success: bool,
    pub stats: DashboardStatsDto,
}
