//! Analytics service bridging the session store and the pure aggregation.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::session::SleepSessionRepository,
    error::AppError,
    model::analytics::{Period, SleepAnalytics},
};

/// Service computing windowed sleep analytics for one account.
pub struct AnalyticsService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AnalyticsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Summarizes the account's sessions over the requested window.
    ///
    /// Fetches the in-window sessions oldest-first and hands them to
    /// `SleepAnalytics::compute`; the aggregation itself touches no database
    /// state, so identical inputs always produce identical summaries.
    ///
    /// # Arguments
    /// - `account_id` - Owning account from the verified token
    /// - `period` - Window length; unrecognized query values already fell back to 30d
    ///
    /// # Returns
    /// - `Ok(SleepAnalytics)` - Aggregates, trend, and insights for the window
    /// - `Err(AppError::DbErr)` - Database error during the window fetch
    pub async fn summarize(
        &self,
        account_id: i32,
        period: Period,
    ) -> Result<SleepAnalytics, AppError> {
        let now = Utc::now();
        let sessions = SleepSessionRepository::new(self.db)
            .find_in_window(account_id, period.window_start(now), now)
            .await?;

        Ok(SleepAnalytics::compute(&sessions, period, now))
    }
}
