use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Gift code as returned to clients.
///
/// `plan_name` is a display snapshot taken at creation; it is deliberately not
/// synced with later plan renames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GiftCodeDto {
    pub id: i32,
    pub code: String,
    pub plan_id: i32,
    pub plan_name: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub max_uses: i32,
    pub used_count: i32,
    pub description: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a gift code.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGiftCodeDto {
    pub code: Option<String>,
    pub plan_id: Option<i32>,
    pub expires_at: Option<DateTime<Utc>>,
    pub max_uses: Option<i32>,
    pub description: Option<String>,
}

/// Response body for successful gift code creation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GiftCodeCreatedDto {
    pub success: bool,
    pub message: String,
    pub gift_code: GiftCodeDto,
}

/// Response body for the admin gift code listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GiftCodeListDto {
    pub success: bool,
    pub gift_codes: Vec<GiftCodeDto>,
}
