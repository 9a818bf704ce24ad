//! Bearer token extraction and verification for protected routes.

use axum::http::{header, HeaderMap};

use crate::{
    error::auth::AuthError,
    service::token::{AdminClaims, TokenService, UserClaims},
};

/// Guard verifying bearer tokens on protected routes.
///
/// Controllers call `require_user` or `require_admin` at the top of each
/// protected handler; the two trust domains never accept each other's tokens.
pub struct AuthGuard<'a> {
    tokens: &'a TokenService,
}

impl<'a> AuthGuard<'a> {
    /// Creates a new AuthGuard instance.
    ///
    /// # Arguments
    /// - `tokens` - Token service holding both verification keys
    ///
    /// # Returns
    /// - `AuthGuard` - New guard instance
    pub fn new(tokens: &'a TokenService) -> Self {
        Self { tokens }
    }

    /// Verifies the request carries a valid user token.
    ///
    /// # Arguments
    /// - `headers` - Request headers
    ///
    /// # Returns
    /// - `Ok(UserClaims)` - Verified user claims
    /// - `Err(AuthError::MissingToken)` - No bearer token on the request
    /// - `Err(AuthError::InvalidToken)` - Malformed, expired, or wrong-domain token
    pub fn require_user(&self, headers: &HeaderMap) -> Result<UserClaims, AuthError> {
        let token = bearer_token(headers).ok_or(AuthError::MissingToken)?;

        self.tokens.verify_user(token)
    }

    /// Verifies the request carries a valid user token owning the given account.
    ///
    /// Protects per-user resources addressed by a path id: the token's subject
    /// must be the addressed account. The check never consults the database,
    /// so a mismatched id is rejected the same way whether or not the target
    /// account exists.
    ///
    /// # Arguments
    /// - `headers` - Request headers
    /// - `owner_id` - Account id from the request path
    ///
    /// # Returns
    /// - `Ok(UserClaims)` - Verified claims belonging to `owner_id`
    /// - `Err(AuthError::MissingToken)` - No bearer token on the request
    /// - `Err(AuthError::InvalidToken)` - Malformed, expired, or wrong-domain token
    /// - `Err(AuthError::OwnerMismatch)` - Valid token for a different account
    pub fn require_owner(
        &self,
        headers: &HeaderMap,
        owner_id: i32,
    ) -> Result<UserClaims, AuthError> {
        let claims = self.require_user(headers)?;

        if claims.account_id()? != owner_id {
            return Err(AuthError::OwnerMismatch);
        }

        Ok(claims)
    }

    /// Verifies the request carries a valid admin token.
    ///
    /// # Arguments
    /// - `headers` - Request headers
    ///
    /// # Returns
    /// - `Ok(AdminClaims)` - Verified admin claims
    /// - `Err(AuthError::MissingToken)` - No bearer token on the request
    /// - `Err(AuthError::InvalidToken)` - Malformed, expired, or wrong-domain token
    /// - `Err(AuthError::AdminRequired)` - Valid token without the admin role
    pub fn require_admin(&self, headers: &HeaderMap) -> Result<AdminClaims, AuthError> {
        let token = bearer_token(headers).ok_or(AuthError::MissingToken)?;

        self.tokens.verify_admin(token)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
///
/// Returns `None` when the header is absent, not valid UTF-8, or not a bearer
/// scheme.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
