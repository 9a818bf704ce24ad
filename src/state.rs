//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Token service for signing and verifying user and admin bearer tokens
//! - Configured admin credentials for the admin login endpoint

use sea_orm::DatabaseConnection;

use crate::service::token::TokenService;

/// Application state containing shared resources and dependencies.
///
/// This struct holds all the shared state that needs to be accessible across
/// request handlers. It is initialized once during server startup and then
/// cloned (cheaply, as it contains reference-counted or cloneable types) for
/// each incoming request via Axum's state extraction.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// This connection is shared across all requests and manages a pool of
    /// connections to the SQLite database.
    pub db: DatabaseConnection,

    /// Token service holding the signing keys for both trust domains.
    ///
    /// User tokens and admin tokens are signed and verified with independent
    /// secrets so one domain's tokens never validate in the other.
    pub tokens: TokenService,

    /// Admin email checked by the admin login endpoint.
    pub admin_email: String,

    /// Admin password checked by the admin login endpoint.
    pub admin_password: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// This constructor is called once during server startup after all
    /// dependencies have been initialized. The resulting state is then
    /// provided to the Axum router for use in request handlers.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Token service for bearer token signing and verification
    /// - `admin_email` - Configured admin email for admin login
    /// - `admin_password` - Configured admin password for admin login
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        tokens: TokenService,
        admin_email: String,
        admin_password: String,
    ) -> Self {
        Self {
            db,
            tokens,
            admin_email,
            admin_password,
        }
    }
}
