//! Bearer token signing and verification.
//!
//! Two independent trust domains share this service: user tokens signed with
//! `JWT_SECRET` and admin tokens signed with `ADMIN_JWT_SECRET`. A token from
//! one domain never verifies in the other, and admin tokens additionally carry
//! a role claim that is checked explicitly.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    error::{auth::AuthError, AppError},
    model::account::Account,
};

/// User tokens live for seven days.
const USER_TOKEN_TTL_DAYS: i64 = 7;
/// Admin tokens live for twenty-four hours.
const ADMIN_TOKEN_TTL_HOURS: i64 = 24;

const ADMIN_ROLE: &str = "admin";
const ADMIN_SUBJECT: &str = "admin-main";

/// Claims carried by a user token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    /// Account id as a string.
    pub sub: String,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

impl UserClaims {
    /// Parses the subject back into an account id.
    ///
    /// A non-numeric subject means the token was not minted by this service,
    /// so it is treated as invalid rather than as an internal error.
    pub fn account_id(&self) -> Result<i32, AuthError> {
        self.sub.parse().map_err(|_| AuthError::InvalidToken)
    }
}

/// Claims carried by an admin token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    pub sub: String,
    pub email: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Service holding the signing and verification keys for both trust domains.
#[derive(Clone)]
pub struct TokenService {
    user_encoding: EncodingKey,
    user_decoding: DecodingKey,
    admin_encoding: EncodingKey,
    admin_decoding: DecodingKey,
}

impl TokenService {
    /// Builds the token service from the configured secrets.
    ///
    /// # Arguments
    /// - `config` - Application configuration carrying both JWT secrets
    pub fn new(config: &Config) -> Self {
        Self {
            user_encoding: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            user_decoding: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            admin_encoding: EncodingKey::from_secret(config.admin_jwt_secret.as_bytes()),
            admin_decoding: DecodingKey::from_secret(config.admin_jwt_secret.as_bytes()),
        }
    }

    /// Issues a seven-day user token for the given account.
    ///
    /// # Returns
    /// - `Ok(String)` - Signed HS256 token
    /// - `Err(AppError::JwtErr)` - Signing failure
    pub fn issue_user(&self, account: &Account) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = UserClaims {
            sub: account.id.to_string(),
            email: account.email.clone(),
            exp: (now + Duration::days(USER_TOKEN_TTL_DAYS)).timestamp(),
            iat: now.timestamp(),
        };

        Ok(encode(&Header::default(), &claims, &self.user_encoding)?)
    }

    /// Verifies a user token and returns its claims.
    ///
    /// All decode failures (malformed, expired, wrong secret) collapse into
    /// `InvalidToken`; the client message never reveals which check failed.
    pub fn verify_user(&self, token: &str) -> Result<UserClaims, AuthError> {
        decode::<UserClaims>(token, &self.user_decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }

    /// Issues a twenty-four-hour admin token.
    ///
    /// # Arguments
    /// - `email` - Configured admin email embedded in the claims
    ///
    /// # Returns
    /// - `Ok(String)` - Signed HS256 token carrying the admin role
    /// - `Err(AppError::JwtErr)` - Signing failure
    pub fn issue_admin(&self, email: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = AdminClaims {
            sub: ADMIN_SUBJECT.to_string(),
            email: email.to_string(),
            role: ADMIN_ROLE.to_string(),
            exp: (now + Duration::hours(ADMIN_TOKEN_TTL_HOURS)).timestamp(),
            iat: now.timestamp(),
        };

        Ok(encode(&Header::default(), &claims, &self.admin_encoding)?)
    }

    /// Verifies an admin token and checks its role claim.
    ///
    /// # Returns
    /// - `Ok(AdminClaims)` - Valid token carrying `role == "admin"`
    /// - `Err(AuthError::InvalidToken)` - Decode failure
    /// - `Err(AuthError::AdminRequired)` - Valid signature but missing the admin role
    pub fn verify_admin(&self, token: &str) -> Result<AdminClaims, AuthError> {
        let claims = decode::<AdminClaims>(token, &self.admin_decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)?;

        if claims.role != ADMIN_ROLE {
            return Err(AuthError::AdminRequired);
        }

        Ok(claims)
    }
}
