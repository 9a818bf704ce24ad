//! Sleep session data repository for database operations.
//!
//! Sessions are append-only: the repository exposes creation and owner-scoped
//! reads but no update or delete. Analytics fetches go through
//! `find_in_window` so the aggregation itself stays a pure function.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::session::{CreateSleepSessionRecord, SleepSession};

/// Repository providing database operations for sleep sessions.
///
/// Generic over the connection so session creation can run inside the same
/// transaction that updates the owning account's counters.
pub struct SleepSessionRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SleepSessionRepository<'a, C> {
    /// Creates a new SleepSessionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or open transaction
    ///
    /// # Returns
    /// - `SleepSessionRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a fully resolved session row.
    ///
    /// # Arguments
    /// - `record` - Session row with defaults already applied by the service
    ///
    /// # Returns
    /// - `Ok(SleepSession)` - The created session
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, record: CreateSleepSessionRecord) -> Result<SleepSession, DbErr> {
        let entity = entity::sleep_session::ActiveModel {
            account_id: ActiveValue::Set(record.account_id),
            duration: ActiveValue::Set(record.duration),
            quality: ActiveValue::Set(record.quality),
            sleep_score: ActiveValue::Set(record.sleep_score),
            stage_light: ActiveValue::Set(record.stages.light),
            stage_deep: ActiveValue::Set(record.stages.deep),
            stage_rem: ActiveValue::Set(record.stages.rem),
            sounds_detected: ActiveValue::Set(record.sounds_detected),
            date: ActiveValue::Set(record.date),
            started_at: ActiveValue::Set(record.started_at),
            ended_at: ActiveValue::Set(record.ended_at),
            notes: ActiveValue::Set(record.notes),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(SleepSession::from_entity(entity))
    }

    /// Gets one owner's sessions, newest first, with offset pagination.
    ///
    /// # Arguments
    /// - `account_id` - Owning account id
    /// - `limit` - Maximum number of sessions to return
    /// - `offset` - Number of sessions to skip
    ///
    /// # Returns
    /// - `Ok((sessions, total))` - Page of sessions and the owner's total session count
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_by_owner(
        &self,
        account_id: i32,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<SleepSession>, u64), DbErr> {
        let total = entity::prelude::SleepSession::find()
            .filter(entity::sleep_session::Column::AccountId.eq(account_id))
            .count(self.db)
            .await?;

        let entities = entity::prelude::SleepSession::find()
            .filter(entity::sleep_session::Column::AccountId.eq(account_id))
            .order_by_desc(entity::sleep_session::Column::Date)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await?;

        let sessions = entities.into_iter().map(SleepSession::from_entity).collect();

        Ok((sessions, total))
    }

    /// Gets one owner's sessions inside an inclusive window, oldest first.
    ///
    /// The ascending order is what the analytics insight heuristics rely on to
    /// read the most recent sessions from the tail.
    ///
    /// # Arguments
    /// - `account_id` - Owning account id
    /// - `start` - Window start, inclusive
    /// - `end` - Window end, inclusive
    ///
    /// # Returns
    /// - `Ok(Vec<SleepSession>)` - In-window sessions ordered by date ascending
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_in_window(
        &self,
        account_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<SleepSession>, DbErr> {
        let entities = entity::prelude::SleepSession::find()
            .filter(entity::sleep_session::Column::AccountId.eq(account_id))
            .filter(entity::sleep_session::Column::Date.gte(start))
            .filter(entity::sleep_session::Column::Date.lte(end))
            .order_by_asc(entity::sleep_session::Column::Date)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(SleepSession::from_entity).collect())
    }

    /// Counts all sessions across all accounts.
    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::SleepSession::find().count(self.db).await
    }

    /// Counts sessions dated at or after the given instant.
    ///
    /// Used by the dashboard's today-session counter with the start of the
    /// current day as the cutoff.
    ///
    /// # Arguments
    /// - `since` - Inclusive lower bound on the session date
    pub async fn count_since(&self, since: DateTime<Utc>) -> Result<u64, DbErr> {
        entity::prelude::SleepSession::find()
            .filter(entity::sleep_session::Column::Date.gte(since))
            .count(self.db)
            .await
    }
}
