//! Sleep session domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sleep_session::SoundLabels;

use crate::dto::session::{CreateSleepSessionDto, SleepSessionDto, StagesDto};

/// Sleep stage breakdown in hours.
///
/// Stages are independent measurements; their sum is not required to equal the
/// session duration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageBreakdown {
    pub light: f64,
    pub deep: f64,
    pub rem: f64,
}

impl StageBreakdown {
    pub fn from_dto(dto: StagesDto) -> Self {
        Self {
            light: dto.light,
            deep: dto.deep,
            rem: dto.rem,
        }
    }

    pub fn into_dto(self) -> StagesDto {
        StagesDto {
            light: self.light,
            deep: self.deep,
            rem: self.rem,
        }
    }
}

/// A logged sleep session. Immutable after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct SleepSession {
    pub id: i32,
    pub account_id: i32,
    pub duration: f64,
    pub quality: f64,
    pub sleep_score: i32,
    pub stages: StageBreakdown,
    pub sounds_detected: Vec<String>,
    pub date: DateTime<Utc>,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

impl SleepSession {
    /// Converts an entity model to a session domain model at the repository boundary.
    pub fn from_entity(entity: entity::sleep_session::Model) -> Self {
        Self {
            id: entity.id,
            account_id: entity.account_id,
            duration: entity.duration,
            quality: entity.quality,
            sleep_score: entity.sleep_score,
            stages: StageBreakdown {
                light: entity.stage_light,
                deep: entity.stage_deep,
                rem: entity.stage_rem,
            },
            sounds_detected: entity.sounds_detected.0,
            date: entity.date,
            started_at: entity.started_at,
            ended_at: entity.ended_at,
            notes: entity.notes,
            created_at: entity.created_at,
        }
    }

    /// Converts the session domain model to a DTO for API responses.
    pub fn into_dto(self) -> SleepSessionDto {
        SleepSessionDto {
            id: self.id,
            user_id: self.account_id,
            duration: self.duration,
            quality: self.quality,
            sleep_score: self.sleep_score,
            stages: self.stages.into_dto(),
            sounds_detected: self.sounds_detected,
            date: self.date,
            started_at: self.started_at,
            ended_at: self.ended_at,
            notes: self.notes,
            created_at: self.created_at,
        }
    }
}

/// Raw creation parameters as received from the client.
///
/// Required-field and range validation happens in the service, which turns
/// these into a [`CreateSleepSessionRecord`] with defaults applied.
#[derive(Debug, Clone)]
pub struct CreateSleepSessionParams {
    pub duration: Option<f64>,
    pub quality: Option<f64>,
    pub stages: StageBreakdown,
    pub sounds_detected: Vec<String>,
    pub date: Option<DateTime<Utc>>,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    pub notes: String,
}

impl CreateSleepSessionParams {
    pub fn from_dto(dto: CreateSleepSessionDto) -> Self {
        Self {
            duration: dto.duration,
            quality: dto.quality,
            stages: dto.stages.map(StageBreakdown::from_dto).unwrap_or_default(),
            sounds_detected: dto.sounds_detected.unwrap_or_default(),
            date: dto.date,
            started_at: dto.started_at,
            ended_at: dto.ended_at,
            notes: dto.notes.unwrap_or_default(),
        }
    }
}

/// Fully resolved session row ready for insertion.
///
/// Produced by the service after validation: quality defaulted to
/// `min(100, duration * 10)` when omitted, sleep score derived as
/// `floor(quality / 10)`.
#[derive(Debug, Clone)]
pub struct CreateSleepSessionRecord {
    pub account_id: i32,
    pub duration: f64,
    pub quality: f64,
    pub sleep_score: i32,
    pub stages: StageBreakdown,
    pub sounds_detected: SoundLabels,
    pub date: DateTime<Utc>,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub notes: String,
}
