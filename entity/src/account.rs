//! Account entity model.
//!
//! Stores one row per registered user, including the bcrypt credential hash
//! and the running sleep counters maintained by the session store.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "account")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    /// Bcrypt hash of the account password. Never exposed past the data layer.
    pub password_hash: String,
    /// Subscription tier as a string: `free`, `premium` or `enterprise`.
    pub subscription: String,
    /// Running counter, incremented by one per recorded sleep session.
    pub sleep_sessions_count: i32,
    /// Running counter, incremented by each session's duration in hours.
    pub total_sleep_hours: f64,
    pub last_login_at: DateTimeUtc,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
