//! Sleep session service for session logging and history.

use chrono::Utc;
use entity::sleep_session::SoundLabels;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{account::AccountRepository, session::SleepSessionRepository},
    error::AppError,
    model::session::{CreateSleepSessionParams, CreateSleepSessionRecord, SleepSession},
};

/// Service providing business logic for sleep session logging.
pub struct SleepSessionService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> SleepSessionService<'a> {
    /// Creates a new SleepSessionService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SleepSessionService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Logs a sleep session for the authenticated account.
    ///
    /// Duration and date are required and duration must be positive. Quality
    /// defaults to `min(100, duration * 10)` when omitted and the sleep score
    /// is derived as `floor(quality / 10)`. The session insert and the owning
    /// account's counter increments commit in one transaction, so the counters
    /// never drift from the stored sessions.
    ///
    /// # Arguments
    /// - `account_id` - Owning account from the verified token
    /// - `param` - Raw session fields from the request body
    ///
    /// # Returns
    /// - `Ok(SleepSession)` - The stored session
    /// - `Err(AppError::Validation)` - Missing or out-of-range fields
    /// - `Err(AppError::DbErr)` - Database error; nothing is persisted
    pub async fn create(
        &self,
        account_id: i32,
        param: CreateSleepSessionParams,
    ) -> Result<SleepSession, AppError> {
        let (Some(duration), Some(date)) = (param.duration, param.date) else {
            return Err(AppError::Validation(
                "Duration and date are required".to_string(),
            ));
        };

        if duration <= 0.0 {
            return Err(AppError::Validation(
                "Duration must be greater than 0".to_string(),
            ));
        }

        if let Some(quality) = param.quality {
            if !(0.0..=100.0).contains(&quality) {
                return Err(AppError::Validation(
                    "Quality must be between 0 and 100".to_string(),
                ));
            }
        }

        if param.stages.light < 0.0 || param.stages.deep < 0.0 || param.stages.rem < 0.0 {
            return Err(AppError::Validation(
                "Sleep stages must be non-negative".to_string(),
            ));
        }

        let quality = param.quality.unwrap_or_else(|| f64::min(100.0, duration * 10.0));
        let sleep_score = (quality / 10.0).floor() as i32;

        let now = Utc::now();
        let record = CreateSleepSessionRecord {
            account_id,
            duration,
            quality,
            sleep_score,
            stages: param.stages,
            sounds_detected: SoundLabels(param.sounds_detected),
            date,
            started_at: param.started_at.unwrap_or(now),
            ended_at: param.ended_at.unwrap_or(now),
            notes: param.notes,
        };

        let txn = self.db.begin().await?;

        let session = SleepSessionRepository::new(&txn).create(record).await?;
        AccountRepository::new(&txn)
            .apply_session_counters(account_id, duration)
            .await?;

        txn.commit().await?;

        Ok(session)
    }

    /// Gets the authenticated account's session history, newest first.
    ///
    /// # Arguments
    /// - `account_id` - Owning account from the verified token
    /// - `limit` - Maximum number of sessions to return
    /// - `offset` - Number of sessions to skip
    ///
    /// # Returns
    /// - `Ok((sessions, total))` - Page of sessions and the account's total count
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn list(
        &self,
        account_id: i32,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<SleepSession>, u64), AppError> {
        let result = SleepSessionRepository::new(self.db)
            .list_by_owner(account_id, limit, offset)
            .await?;

        Ok(result)
    }
}
