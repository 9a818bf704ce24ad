//! Sound library data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::sound::{CreateSoundRecord, Sound, UpdateSoundParams};

/// Repository providing database operations for the sound library.
pub struct SoundRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SoundRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new sound with zeroed counters, marked active.
    ///
    /// # Arguments
    /// - `record` - Sound row with defaults already applied by the service
    ///
    /// # Returns
    /// - `Ok(Sound)` - The created sound
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, record: CreateSoundRecord) -> Result<Sound, DbErr> {
        let now = Utc::now();
        let entity = entity::sound_asset::ActiveModel {
            name: ActiveValue::Set(record.name),
            category: ActiveValue::Set(record.category),
            file_path: ActiveValue::Set(record.file_path),
            premium: ActiveValue::Set(record.premium),
            duration_secs: ActiveValue::Set(record.duration_secs),
            play_count: ActiveValue::Set(0),
            like_count: ActiveValue::Set(0),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Sound::from_entity(entity))
    }

    /// Gets all active sounds ordered alphabetically by name.
    ///
    /// This is the public library listing.
    pub async fn list_active(&self) -> Result<Vec<Sound>, DbErr> {
        let entities = entity::prelude::SoundAsset::find()
            .filter(entity::sound_asset::Column::Active.eq(true))
            .order_by_asc(entity::sound_asset::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Sound::from_entity).collect())
    }

    /// Gets the full library including inactive sounds, newest first.
    ///
    /// Used by the admin listing.
    pub async fn list_all(&self) -> Result<Vec<Sound>, DbErr> {
        let entities = entity::prelude::SoundAsset::find()
            .order_by_desc(entity::sound_asset::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Sound::from_entity).collect())
    }

    /// Counts all active sounds.
    pub async fn count_active(&self) -> Result<u64, DbErr> {
        entity::prelude::SoundAsset::find()
            .filter(entity::sound_asset::Column::Active.eq(true))
            .count(self.db)
            .await
    }

    /// Applies a partial update to a sound.
    ///
    /// Only the provided fields are written; omitted fields keep their stored
    /// values. The updated-at timestamp is always refreshed.
    ///
    /// # Arguments
    /// - `id` - Sound id to update
    /// - `param` - Partial update with `None` for untouched fields
    ///
    /// # Returns
    /// - `Ok(Some(Sound))` - The updated sound
    /// - `Ok(None)` - No sound with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, id: i32, param: UpdateSoundParams) -> Result<Option<Sound>, DbErr> {
        let Some(existing) = entity::prelude::SoundAsset::find_by_id(id).one(self.db).await?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();

        if let Some(name) = param.name {
            model.name = ActiveValue::Set(name);
        }
        if let Some(category) = param.category {
            model.category = ActiveValue::Set(category);
        }
        if let Some(file_path) = param.file_path {
            model.file_path = ActiveValue::Set(file_path);
        }
        if let Some(premium) = param.premium {
            model.premium = ActiveValue::Set(premium);
        }
        if let Some(duration_secs) = param.duration_secs {
            model.duration_secs = ActiveValue::Set(duration_secs);
        }
        if let Some(active) = param.active {
            model.active = ActiveValue::Set(active);
        }
        model.updated_at = ActiveValue::Set(Utc::now());

        let entity = model.update(self.db).await?;

        Ok(Some(Sound::from_entity(entity)))
    }

    /// Deletes a sound from the library.
    ///
    /// # Arguments
    /// - `id` - Sound id to delete
    ///
    /// # Returns
    /// - `Ok(true)` - Sound deleted
    /// - `Ok(false)` - No sound with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::SoundAsset::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
