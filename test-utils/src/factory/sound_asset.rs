//! Sound asset factory for creating test sound library entries.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test sound assets with customizable fields.
pub struct SoundAssetFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    category: String,
    file_path: String,
    premium: bool,
    duration_secs: i32,
    active: bool,
}

impl<'a> SoundAssetFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Sound {}", id),
            category: "nature".to_string(),
            file_path: format!("/sounds/sound-{}.mp3", id),
            premium: false,
            duration_secs: 1800,
            active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn premium(mut self, premium: bool) -> Self {
        self.premium = premium;
        self
    }

    pub fn duration_secs(mut self, duration_secs: i32) -> Self {
        self.duration_secs = duration_secs;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the sound asset entity into the database.
    pub async fn build(self) -> Result<entity::sound_asset::Model, DbErr> {
        let now = Utc::now();
        entity::sound_asset::ActiveModel {
            name: ActiveValue::Set(self.name),
            category: ActiveValue::Set(self.category),
            file_path: ActiveValue::Set(self.file_path),
            premium: ActiveValue::Set(self.premium),
            duration_secs: ActiveValue::Set(self.duration_secs),
            play_count: ActiveValue::Set(0),
            like_count: ActiveValue::Set(0),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a sound asset with default values.
pub async fn create_sound(db: &DatabaseConnection) -> Result<entity::sound_asset::Model, DbErr> {
    SoundAssetFactory::new(db).build().await
}
