//! Account service for registration, login, and profile lookups.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::account::AccountRepository,
    error::{auth::AuthError, AppError},
    model::account::{Account, CreateAccountParams},
};

/// Cost factor for bcrypt password hashing.
const BCRYPT_COST: u32 = 12;

/// Parameters for user registration as received from the client.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Parameters for user login as received from the client.
#[derive(Debug, Clone)]
pub struct LoginParams {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Service providing business logic for account management.
pub struct AccountService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    /// Creates a new AccountService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AccountService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// Validates required fields and email format, rejects duplicate emails,
    /// hashes the password with bcrypt, and stores the account on the free
    /// tier with zeroed sleep statistics.
    ///
    /// # Arguments
    /// - `param` - Raw registration fields from the request body
    ///
    /// # Returns
    /// - `Ok(Account)` - The newly created account
    /// - `Err(AppError::Validation)` - Missing fields or malformed email
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AppError)` - Hashing or database failure
    pub async fn register(&self, param: RegisterParams) -> Result<Account, AppError> {
        let (Some(name), Some(email), Some(password)) = (param.name, param.email, param.password)
        else {
            return Err(AppError::Validation(
                "Name, email, and password are required".to_string(),
            ));
        };
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AppError::Validation(
                "Name, email, and password are required".to_string(),
            ));
        }

        if !is_valid_email(&email) {
            return Err(AppError::Validation("Invalid email format".to_string()));
        }

        let repo = AccountRepository::new(self.db);

        if repo.email_exists(&email).await? {
            return Err(AppError::Conflict(
                "User already exists with this email".to_string(),
            ));
        }

        let password_hash = bcrypt::hash(&password, BCRYPT_COST)?;

        let account = repo
            .create(CreateAccountParams {
                name,
                email,
                password_hash,
            })
            .await?;

        Ok(account)
    }

    /// Verifies credentials and records the login.
    ///
    /// Unknown emails and wrong passwords produce the same error so the
    /// response does not reveal which accounts exist.
    ///
    /// # Arguments
    /// - `param` - Raw login fields from the request body
    ///
    /// # Returns
    /// - `Ok(Account)` - Verified account with its login timestamp refreshed
    /// - `Err(AppError::Validation)` - Missing fields
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError)` - Hash verification or database failure
    pub async fn login(&self, param: LoginParams) -> Result<Account, AppError> {
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

        let repo = AccountRepository::new(self.db);

        let Some(credentials) = repo.find_credentials_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !bcrypt::verify(&password, &credentials.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let mut account = credentials.account;
        repo.touch_last_login(account.id).await?;
        account.last_login_at = Utc::now();

        Ok(account)
    }

    /// Fetches the account behind an authenticated token.
    ///
    /// # Arguments
    /// - `account_id` - Account id from the verified token's subject
    ///
    /// # Returns
    /// - `Ok(Account)` - The account
    /// - `Err(AppError::NotFound)` - Token subject no longer exists
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn profile(&self, account_id: i32) -> Result<Account, AppError> {
        let account = AccountRepository::new(self.db)
            .find_by_id(account_id)
            .await?;

        account.ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}

/// Checks the shape `local@domain.tld` with no whitespace.
///
/// Mirrors the lenient pattern used by the mobile clients: one `@`, non-empty
/// local part, and a dot somewhere after the `@`.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}
