//! Sound library domain models and parameters.

use chrono::{DateTime, Utc};

use crate::dto::sound::{CreateSoundDto, SoundDto, UpdateSoundDto};

/// Sound library entry. `file_path` is a storage locator string only; the
/// backend never touches the referenced file.
#[derive(Debug, Clone, PartialEq)]
pub struct Sound {
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
    pub updated_at: DateTime<Utc>,
}

impl Sound {
    pub fn from_entity(entity: entity::sound_asset::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            category: entity.category,
            file_path: entity.file_path,
            premium: entity.premium,
            duration_secs: entity.duration_secs,
            play_count: entity.play_count,
            like_count: entity.like_count,
            active: entity.active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> SoundDto {
        SoundDto {
            id: self.id,
            name: self.name,
            category: self.category,
            file_path: self.file_path,
            premium: self.premium,
            duration_secs: self.duration_secs,
            play_count: self.play_count,
            like_count: self.like_count,
            active: self.active,
            created_at: self.created_at,
        }
    }
}

/// Parameters for adding a sound to the library.
#[derive(Debug, Clone)]
pub struct CreateSoundParams {
    pub name: Option<String>,
    pub category: Option<String>,
    pub file_path: Option<String>,
    pub premium: bool,
    pub duration_secs: i32,
}

impl CreateSoundParams {
    pub fn from_dto(dto: CreateSoundDto) -> Self {
        Self {
            name: dto.name,
            category: dto.category,
            file_path: dto.file_path,
            premium: dto.premium.unwrap_or(false),
            duration_secs: dto.duration_secs.unwrap_or(0),
        }
    }
}

/// Fully resolved sound row ready for insertion, produced by the service after
/// required-field validation.
#[derive(Debug, Clone)]
pub struct CreateSoundRecord {
    pub name: String,
    pub category: String,
    pub file_path: String,
    pub premium: bool,
    pub duration_secs: i32,
}

/// Parameters for a partial sound update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateSoundParams {
    pub name: Option<String>,
    pub category: Option<String>,
    pub file_path: Option<String>,
    pub premium: Option<bool>,
    pub duration_secs: Option<i32>,
    pub active: Option<bool>,
}

impl UpdateSoundParams {
    pub fn from_dto(dto: UpdateSoundDto) -> Self {
        Self {
            name: dto.name,
            category: dto.category,
            file_path: dto.file_path,
            premium: dto.premium,
            duration_secs: dto.duration_secs,
            active: dto.active,
        }
    }
}
