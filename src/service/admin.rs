//! Admin service for console login and the management listings.

use chrono::{NaiveTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        account::AccountRepository, plan::PlanRepository, session::SleepSessionRepository,
        sound::SoundRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        account::Account,
        admin::{DashboardStats, SoundLibraryCounts, UserTierCounts},
        sound::Sound,
    },
    state::AppState,
};

/// Parameters for admin login as received from the client.
#[derive(Debug, Clone)]
pub struct AdminLoginParams {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Service providing business logic for the admin console.
///
/// The console has a single operator account configured through the
/// environment rather than stored in the database.
pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
    admin_email: &'a str,
    admin_password: &'a str,
}

impl<'a> AdminService<'a> {
    /// Creates a new AdminService instance.
    ///
    /// # Arguments
    /// - `state` - Application state carrying the pool and admin credentials
    ///
    /// # Returns
    /// - `AdminService` - New service instance
    pub fn new(state: &'a AppState) -> Self {
        Self {
            db: &state.db,
            admin_email: &state.admin_email,
            admin_password: &state.admin_password,
        }
    }

    /// Verifies the configured admin credentials.
    ///
    /// # Arguments
    /// - `param` - Raw login fields from the request body
    ///
    /// # Returns
    /// - `Ok(String)` - The verified admin email, ready for token issuance
    /// - `Err(AppError::Validation)` - Missing fields
    /// - `Err(AppError::AuthErr(InvalidAdminCredentials))` - Credential mismatch
    pub fn verify_login(&self, param: AdminLoginParams) -> Result<String, AppError> {
        let (Some(email), Some(password)) = (param.email, param.password) else {
            return Err(AppError::Validation(
                "Email and password are required".to_string(),
            ));
        };
        if email.is_empty() || password.is_empty() {
            return Err(AppError::Validation(
                "Email and password are required".to_string(),
            ));
        }

        if email != self.admin_email || password != self.admin_password {
            return Err(AuthError::InvalidAdminCredentials.into());
        }

        Ok(email)
    }

    /// Gets every account with per-tier counts for the user listing.
    ///
    /// Accounts on the enterprise tier count as premium here; the listing only
    /// distinguishes paying from free users.
    ///
    /// # Returns
    /// - `Ok((accounts, counts))` - All accounts newest first plus tier totals
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn list_users(&self) -> Result<(Vec<Account>, UserTierCounts), AppError> {
        let repo = AccountRepository::new(self.db);

        let accounts = repo.list_all().await?;
        let total = repo.count_all().await?;
        let free = repo.count_by_subscription("free").await?;

        let counts = UserTierCounts {
            total,
            premium: total - free,
            free,
        };

        Ok((accounts, counts))
    }

    /// Gets the full sound library with its premium split.
    ///
    /// # Returns
    /// - `Ok((sounds, counts))` - All sounds newest first plus premium totals
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn list_sounds(&self) -> Result<(Vec<Sound>, SoundLibraryCounts), AppError> {
        let sounds = SoundRepository::new(self.db).list_all().await?;

        let total = sounds.len() as u64;
        let premium = sounds.iter().filter(|sound| sound.premium).count() as u64;

        let counts = SoundLibraryCounts {
            total,
            premium,
            free: total - premium,
        };

        Ok((sounds, counts))
    }

    /// Computes the dashboard counters.
    ///
    /// Today's session count uses midnight UTC of the current day as its
    /// cutoff.
    ///
    /// # Returns
    /// - `Ok(DashboardStats)` - Aggregate counters for the dashboard
    /// - `Err(AppError::DbErr)` - Database error during any count query
    pub async fn dashboard(&self) -> Result<DashboardStats, AppError> {
        let accounts = AccountRepository::new(self.db);
        let sessions = SleepSessionRepository::new(self.db);

        let total_users = accounts.count_all().await?;
        let free_users = accounts.count_by_subscription("free").await?;

        let today_start = Utc::now().date_naive().and_time(NaiveTime::MIN).and_utc();

        Ok(DashboardStats {
            total_users,
            premium_users: total_users - free_users,
            total_sessions: sessions.count_all().await?,
            today_sessions: sessions.count_since(today_start).await?,
            active_sounds: SoundRepository::new(self.db).count_active().await?,
            active_plans: PlanRepository::new(self.db).count_active().await?,
        })
    }
}
