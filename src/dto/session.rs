use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sleep stage breakdown in hours.
///
/// No invariant ties the stage sum to the session duration; partial trackers
/// report whatever they measured and missing stages default to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StagesDto {
    #[serde(default)]
    pub light: f64,
    #[serde(default)]
    pub deep: f64,
    #[serde(default)]
    pub rem: f64,
}

/// Request body for logging a sleep session.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSleepSessionDto {
    pub duration: Option<f64>,
    pub quality: Option<f64>,
    pub stages: Option<StagesDto>,
    pub sounds_detected: Option<Vec<String>>,
    pub date: Option<DateTime<Utc>>,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

/// Stored sleep session as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SleepSessionDto {
    pub id: i32,
    pub user_id: i32,
    pub duration: f64,
    pub quality: f64,
    pub sleep_score: i32,
    pub stages: StagesDto,
    pub sounds_detected: Vec<String>,
    pub date: DateTime<Utc>,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

/// Response body for successful session creation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionCreatedDto {
    pub success: bool,
    pub message: String,
    pub session: SleepSessionDto,
}

/// Response body for the owner-scoped session listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionListDto {
    pub success: bool,
    pub sessions: Vec<SleepSessionDto>,
    pub total: u64,
}
