use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::api::ErrorDto;

#[derive(Error, Debug, PartialEq)]
pub enum AuthError {
    /// No `Authorization: Bearer` header was present on a protected route.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Access token required")]
    MissingToken,

    /// The bearer token failed verification.
    ///
    /// Covers malformed tokens, expired tokens, and tokens signed with the
    /// wrong secret. Results in a 401 Unauthorized response.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Login failed because the email is unknown or the password does not match.
    ///
    /// The message deliberately does not reveal which of the two was wrong.
    /// Results in a 401 Unauthorized response.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Admin login failed against the configured admin credentials.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid admin credentials")]
    InvalidAdminCredentials,

    /// A valid token was presented but it does not carry the admin role.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Admin access required")]
    AdminRequired,

    /// A user attempted to read another account's sessions.
    ///
    /// Results in a 403 Forbidden response regardless of whether the target
    /// account exists.
    #[error("Access denied")]
    OwnerMismatch,
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes with the error's
/// display message as the client-facing error string:
/// - `MissingToken` / `InvalidToken` / `InvalidCredentials` / `InvalidAdminCredentials`
///   → 401 Unauthorized
/// - `AdminRequired` / `OwnerMismatch` → 403 Forbidden
///
/// # Returns
/// - 401 Unauthorized - For missing, invalid, or unverifiable credentials
/// - 403 Forbidden - For authenticated callers lacking the required access
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::MissingToken
            | Self::InvalidToken
            | Self::InvalidCredentials
            | Self::InvalidAdminCredentials => StatusCode::UNAUTHORIZED,
            Self::AdminRequired | Self::OwnerMismatch => StatusCode::FORBIDDEN,
        };

        (status, Json(ErrorDto::new(self.to_string()))).into_response()
    }
}
