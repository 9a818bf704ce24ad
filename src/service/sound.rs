//! Sound library service.

use sea_orm::DatabaseConnection;

use crate::{
    data::sound::SoundRepository,
    error::AppError,
    model::sound::{CreateSoundParams, CreateSoundRecord, Sound, UpdateSoundParams},
};

/// Service providing business logic for the sound library.
pub struct SoundService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> SoundService<'a> {
    /// Creates a new SoundService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SoundService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists active sounds for the public catalog, alphabetical by name.
    ///
    /// # Returns
    /// - `Ok(Vec<Sound>)` - Active sounds ordered by name
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn list_active(&self) -> Result<Vec<Sound>, AppError> {
        let sounds = SoundRepository::new(self.db).list_active().await?;

        Ok(sounds)
    }

    /// Adds a sound to the library.
    ///
    /// Name, category, and file path are required. New sounds start active
    /// with zeroed play and download counters.
    ///
    /// # Arguments
    /// - `param` - Raw sound fields from the request body
    ///
    /// # Returns
    /// - `Ok(Sound)` - The stored sound
    /// - `Err(AppError::Validation)` - Missing fields
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateSoundParams) -> Result<Sound, AppError> {
        let (Some(name), Some(category), Some(file_path)) =
            (param.name, param.category, param.file_path)
        else {
            return Err(AppError::Validation(
                "Name, category, and file path are required".to_string(),
            ));
        };
        if name.is_empty() || category.is_empty() || file_path.is_empty() {
            return Err(AppError::Validation(
                "Name, category, and file path are required".to_string(),
            ));
        }

        let sound = SoundRepository::new(self.db)
            .create(CreateSoundRecord {
                name,
                category,
                file_path,
                premium: param.premium,
                duration_secs: param.duration_secs,
            })
            .await?;

        Ok(sound)
    }

    /// Applies a partial update to a sound.
    ///
    /// # Arguments
    /// - `sound_id` - Sound to update
    /// - `param` - Fields to change; omitted fields keep their stored values
    ///
    /// # Returns
    /// - `Ok(Sound)` - The updated sound
    /// - `Err(AppError::NotFound)` - No sound with this id
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, sound_id: i32, param: UpdateSoundParams) -> Result<Sound, AppError> {
        let sound = SoundRepository::new(self.db).update(sound_id, param).await?;

        sound.ok_or_else(|| AppError::NotFound("Sound not found".to_string()))
    }

    /// Removes a sound from the library.
    ///
    /// # Arguments
    /// - `sound_id` - Sound to delete
    ///
    /// # Returns
    /// - `Ok(())` - Sound removed
    /// - `Err(AppError::NotFound)` - No sound with this id
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, sound_id: i32) -> Result<(), AppError> {
        let deleted = SoundRepository::new(self.db).delete(sound_id).await?;

        if !deleted {
            return Err(AppError::NotFound("Sound not found".to_string()));
        }

        Ok(())
    }
}
