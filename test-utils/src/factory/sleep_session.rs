//! Sleep session factory for creating test session entities.

use chrono::{Duration, Utc};
use entity::sleep_session::SoundLabels;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test sleep sessions with customizable fields.
///
/// Defaults model a healthy night: 7.5 hours, quality 85, a typical stage
/// split, and no detected sounds. `days_ago()` is the usual way to place a
/// session inside or outside an analytics window.
pub struct SleepSessionFactory<'a> {
    db: &'a DatabaseConnection,
    account_id: i32,
    duration: f64,
    quality: f64,
    sleep_score: i32,
    stage_light: f64,
    stage_deep: f64,
    stage_rem: f64,
    sounds_detected: Vec<String>,
    date: chrono::DateTime<Utc>,
    notes: String,
}

impl<'a> SleepSessionFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            account_id: 1,
            duration: 7.5,
            quality: 85.0,
            sleep_score: 8,
            stage_light: 4.5,
            stage_deep: 1.5,
            stage_rem: 1.5,
            sounds_detected: Vec::new(),
            date: Utc::now(),
            notes: String::new(),
        }
    }

    pub fn account_id(mut self, account_id: i32) -> Self {
        self.account_id = account_id;
        self
    }

    pub fn duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Sets quality and keeps the derived sleep score consistent with it.
    pub fn quality(mut self, quality: f64) -> Self {
        self.quality = quality;
        self.sleep_score = (quality / 10.0).floor() as i32;
        self
    }

    pub fn sounds_detected(mut self, labels: Vec<&str>) -> Self {
        self.sounds_detected = labels.into_iter().map(String::from).collect();
        self
    }

    pub fn date(mut self, date: chrono::DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Places the session `days` calendar days in the past.
    pub fn days_ago(mut self, days: i64) -> Self {
        self.date = Utc::now() - Duration::days(days);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Builds and inserts the sleep session entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::sleep_session::Model)` - Created session entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::sleep_session::Model, DbErr> {
        let now = Utc::now();
        entity::sleep_session::ActiveModel {
            account_id: ActiveValue::Set(self.account_id),
            duration: ActiveValue::Set(self.duration),
            quality: ActiveValue::Set(self.quality),
            sleep_score: ActiveValue::Set(self.sleep_score),
            stage_light: ActiveValue::Set(self.stage_light),
            stage_deep: ActiveValue::Set(self.stage_deep),
            stage_rem: ActiveValue::Set(self.stage_rem),
            sounds_detected: ActiveValue::Set(SoundLabels(self.sounds_detected)),
            date: ActiveValue::Set(self.date),
            started_at: ActiveValue::Set(self.date),
            ended_at: ActiveValue::Set(self.date + Duration::hours(8)),
            notes: ActiveValue::Set(self.notes),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a sleep session for the given account with default values.
pub async fn create_session(
    db: &DatabaseConnection,
    account_id: i32,
) -> Result<entity::sleep_session::Model, DbErr> {
    SleepSessionFactory::new(db).account_id(account_id).build().await
}
