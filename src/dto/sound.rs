use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sound library entry as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SoundDto {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub file_path: String,
    pub premium: bool,
    pub duration_secs: i32,
    pub play_count: i32,
    pub like_count: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Response body for the public listing of active sounds.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SoundListDto {
    pub success: bool,
    pub sounds: Vec<SoundDto>,
}

/// Request body for adding a sound to the library.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSoundDto {
    pub name: Option<String>,
    pub category: Option<String>,
    pub file_path: Option<String>,
    pub premium: Option<bool>,
    pub duration_secs: Option<i32>,
}

/// Request body for a partial sound update. Omitted fields are left untouched.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSoundDto {
    pub name: Option<String>,
    pub category: Option<String>,
    pub file_path: Option<String>,
    pub premium: Option<bool>,
    pub duration_secs: Option<i32>,
    pub active: Option<bool>,
}

/// Response body for sound creation or update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SoundMutationDto {
    pub success: bool,
    pub message: String,
    pub sound: SoundDto,
}
