//! Account data repository for database operations.
//!
//! This module provides the `AccountRepository` for managing account records in the
//! database. It handles account creation, credential lookup, login bookkeeping, and the
//! sleep statistic counters, with proper conversion between entity models and domain
//! models at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, ExprTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::account::{Account, AccountCredentials, CreateAccountParams};

/// Repository providing database operations for account management.
///
/// Generic over the connection so the same repository runs against both the
/// shared pool and an open transaction (session creation updates the account
/// counters inside the session insert's transaction).
pub struct AccountRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountRepository<'a, C> {
    /// Creates a new AccountRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or open transaction
    ///
    /// # Returns
    /// - `AccountRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new account with zeroed sleep statistics and the free tier.
    ///
    /// # Arguments
    /// - `param` - Account creation parameters with the password already hashed
    ///
    /// # Returns
    /// - `Ok(Account)` - The created account
    /// - `Err(DbErr)` - Database error during insert (including unique email violations)
    pub async fn create(&self, param: CreateAccountParams) -> Result<Account, DbErr> {
        let now = Utc::now();
        let entity = entity::account::ActiveModel {
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            subscription: ActiveValue::Set("free".to_string()),
            sleep_sessions_count: ActiveValue::Set(0),
            total_sleep_hours: ActiveValue::Set(0.0),
            last_login_at: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Account::from_entity(entity))
    }

    /// Finds an account by its primary key.
    ///
    /// # Arguments
    /// - `id` - Account id
    ///
    /// # Returns
    /// - `Ok(Some(Account))` - Account found
    /// - `Ok(None)` - No account with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Account>, DbErr> {
        let entity = entity::prelude::Account::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Account::from_entity))
    }

    /// Finds an account together with its password hash for login verification.
    ///
    /// # Arguments
    /// - `email` - Email to look up
    ///
    /// # Returns
    /// - `Ok(Some(AccountCredentials))` - Account found with stored hash
    /// - `Ok(None)` - No account with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AccountCredentials>, DbErr> {
        let entity = entity::prelude::Account::find()
            .filter(entity::account::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(AccountCredentials::from_entity))
    }

    /// Checks whether an account with the given email already exists.
    ///
    /// Used for the registration pre-check; the unique index on email closes
    /// the remaining race between concurrent registrations.
    ///
    /// # Arguments
    /// - `email` - Email to check
    ///
    /// # Returns
    /// - `Ok(true)` - An account with this email exists
    /// - `Ok(false)` - Email is unused
    /// - `Err(DbErr)` - Database error during count query
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Account::find()
            .filter(entity::account::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Updates the last login timestamp for an account.
    ///
    /// # Arguments
    /// - `id` - Account id
    ///
    /// # Returns
    /// - `Ok(())` - Timestamp updated (or no matching account)
    /// - `Err(DbErr)` - Database error during update
    pub async fn touch_last_login(&self, id: i32) -> Result<(), DbErr> {
        let now = Utc::now();
        entity::prelude::Account::update_many()
            .filter(entity::account::Column::Id.eq(id))
            .col_expr(entity::account::Column::LastLoginAt, Expr::value(now))
            .col_expr(entity::account::Column::UpdatedAt, Expr::value(now))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Increments the account's sleep statistics for a newly logged session.
    ///
    /// Adds one to `sleep_sessions_count` and the session duration to
    /// `total_sleep_hours` as a single in-database update, so concurrent
    /// session creations never lose increments. Runs inside the session
    /// insert's transaction.
    ///
    /// # Arguments
    /// - `id` - Account id owning the session
    /// - `duration` - Session duration in hours
    ///
    /// # Returns
    /// - `Ok(())` - Counters updated
    /// - `Err(DbErr)` - Database error during update
    pub async fn apply_session_counters(&self, id: i32, duration: f64) -> Result<(), DbErr> {
        entity::prelude::Account::update_many()
            .filter(entity::account::Column::Id.eq(id))
            .col_expr(
                entity::account::Column::SleepSessionsCount,
                Expr::col(entity::account::Column::SleepSessionsCount).add(1),
            )
            .col_expr(
                entity::account::Column::TotalSleepHours,
                Expr::col(entity::account::Column::TotalSleepHours).add(duration),
            )
            .col_expr(entity::account::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Gets all accounts, newest first.
    ///
    /// Used by the admin user listing.
    ///
    /// # Returns
    /// - `Ok(Vec<Account>)` - All accounts ordered by creation time descending
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_all(&self) -> Result<Vec<Account>, DbErr> {
        let entities = entity::prelude::Account::find()
            .order_by_desc(entity::account::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Account::from_entity).collect())
    }

    /// Counts all accounts.
    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::Account::find().count(self.db).await
    }

    /// Counts accounts on the given subscription tier.
    ///
    /// # Arguments
    /// - `tier` - Stored tier string (`free`, `premium`, `enterprise`)
    pub async fn count_by_subscription(&self, tier: &str) -> Result<u64, DbErr> {
        entity::prelude::Account::find()
            .filter(entity::account::Column::Subscription.eq(tier))
            .count(self.db)
            .await
    }
}
