//! Account factory for creating test account entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test accounts with customizable fields.
///
/// Provides a builder pattern for creating account entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::account::AccountFactory;
///
/// let account = AccountFactory::new(&db)
///     .email("john@example.com")
///     .subscription("premium")
///     .build()
///     .await?;
/// ```
pub struct AccountFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    password_hash: String,
    subscription: String,
    sleep_sessions_count: i32,
    total_sleep_hours: f64,
}

impl<'a> AccountFactory<'a> {
    /// Creates a new AccountFactory with default values.
    ///
    /// Defaults:
    /// - name: `"User {id}"` where id is auto-incremented
    /// - email: `"user{id}@example.com"`
    /// - password_hash: a fixed bcrypt-shaped placeholder
    /// - subscription: `"free"`
    /// - counters: zero
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            password_hash: "$2b$12$C6UzMDM.H6dfI/f/IKcEeO".to_string(),
            subscription: "free".to_string(),
            sleep_sessions_count: 0,
            total_sleep_hours: 0.0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn subscription(mut self, subscription: impl Into<String>) -> Self {
        self.subscription = subscription.into();
        self
    }

    pub fn sleep_sessions_count(mut self, count: i32) -> Self {
        self.sleep_sessions_count = count;
        self
    }

    pub fn total_sleep_hours(mut self, hours: f64) -> Self {
        self.total_sleep_hours = hours;
        self
    }

    /// Builds and inserts the account entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::account::Model)` - Created account entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::account::Model, DbErr> {
        let now = Utc::now();
        entity::account::ActiveModel {
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            subscription: ActiveValue::Set(self.subscription),
            sleep_sessions_count: ActiveValue::Set(self.sleep_sessions_count),
            total_sleep_hours: ActiveValue::Set(self.total_sleep_hours),
            last_login_at: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an account with default values.
///
/// Shorthand for `AccountFactory::new(db).build().await`.
pub async fn create_account(db: &DatabaseConnection) -> Result<entity::account::Model, DbErr> {
    AccountFactory::new(db).build().await
}
