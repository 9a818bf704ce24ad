//! Account domain models and parameters.
//!
//! Provides the domain representation of user accounts along with parameter types
//! for registration. The password hash never crosses the repository boundary on
//! the main `Account` model; login uses the separate `AccountCredentials` lookup.

use chrono::{DateTime, Utc};

use crate::dto::account::UserDto;

/// Subscription tier of an account.
///
/// Stored as a plain string in the database; parsing is lenient and falls back
/// to `Free` for unrecognized values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionTier {
    Free,
    Premium,
    Enterprise,
}

impl SubscriptionTier {
    /// Parses a stored tier string, defaulting to `Free` for unknown values.
    pub fn parse(value: &str) -> Self {
        match value {
            "premium" => Self::Premium,
            "enterprise" => Self::Enterprise,
            _ => Self::Free,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Premium => "premium",
            Self::Enterprise => "enterprise",
        }
    }
}

/// User account with subscription tier and sleep statistics.
///
/// The `sleep_sessions_count` and `total_sleep_hours` counters are mutated only
/// by sleep session creation, in the same transaction as the session insert.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub subscription: SubscriptionTier,
    pub sleep_sessions_count: i32,
    pub total_sleep_hours: f64,
    pub last_login_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Converts an entity model to an account domain model at the repository boundary.
    ///
    /// The password hash is dropped here; it is only reachable through
    /// `AccountCredentials`.
    pub fn from_entity(entity: entity::account::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            subscription: SubscriptionTier::parse(&entity.subscription),
            sleep_sessions_count: entity.sleep_sessions_count,
            total_sleep_hours: entity.total_sleep_hours,
            last_login_at: entity.last_login_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the account domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            subscription: self.subscription.as_str().to_string(),
            sleep_sessions_count: self.sleep_sessions_count,
            total_sleep_hours: self.total_sleep_hours,
            last_login_at: self.last_login_at,
            created_at: self.created_at,
        }
    }
}

/// Account paired with its stored password hash, for credential verification.
///
/// Only the login path retrieves this; everything else works with `Account`.
#[derive(Debug, Clone)]
pub struct AccountCredentials {
    pub account: Account,
    pub password_hash: String,
}

impl AccountCredentials {
    pub fn from_entity(entity: entity::account::Model) -> Self {
        let password_hash = entity.password_hash.clone();
        Self {
            account: Account::from_entity(entity),
            password_hash,
        }
    }
}

/// Parameters for creating a new account during registration.
///
/// The password is already hashed by the service layer before this reaches the
/// repository.
#[derive(Debug, Clone)]
pub struct CreateAccountParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
