use chrono::Utc;

use crate::{
    config::Config,
    error::auth::AuthError,
    model::account::{Account, SubscriptionTier},
    service::token::TokenService,
};

fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "user-secret".to_string(),
        admin_jwt_secret: "admin-secret".to_string(),
        admin_email: "admin@admin.com".to_string(),
        admin_password: "admin123".to_string(),
        port: 0,
    }
}

fn test_account(id: i32, email: &str) -> Account {
    let now = Utc::now();
    Account {
        id,
        name: "Ada".to_string(),
        email: email.to_string(),
        subscription: SubscriptionTier::Free,
        sleep_sessions_count: 0,
        total_sleep_hours: 0.0,
        last_login_at: now,
        created_at: now,
        updated_at: now,
    }
}

/// Tests the user token roundtrip.
///
/// Expected: claims carry the account id and email
#[test]
fn user_token_roundtrip() {
    let tokens = TokenService::new(&test_config());

    let token = tokens.issue_user(&test_account(42, "ada@example.com")).unwrap();
    let claims = tokens.verify_user(&token).unwrap();

    assert_eq!(claims.account_id().unwrap(), 42);
    assert_eq!(claims.email, "ada@example.com");
}

/// Tests the admin token roundtrip.
///
/// Expected: claims carry the admin subject, role, and email
#[test]
fn admin_token_roundtrip() {
    let tokens = TokenService::new(&test_config());

    let token = tokens.issue_admin("admin@admin.com").unwrap();
    let claims = tokens.verify_admin(&token).unwrap();

    assert_eq!(claims.sub, "admin-main");
    assert_eq!(claims.role, "admin");
    assert_eq!(claims.email, "admin@admin.com");
}

/// Tests that the two trust domains stay separate.
///
/// A token signed in one domain must never verify in the other.
///
/// Expected: cross-domain verification fails as an invalid token
#[test]
fn domains_do_not_cross_verify() {
    let tokens = TokenService::new(&test_config());

    let user_token = tokens.issue_user(&test_account(1, "ada@example.com")).unwrap();
    let admin_token = tokens.issue_admin("admin@admin.com").unwrap();

    assert_eq!(tokens.verify_admin(&user_token).unwrap_err(), AuthError::InvalidToken);
    assert_eq!(tokens.verify_user(&admin_token).unwrap_err(), AuthError::InvalidToken);
}

/// Tests verification of garbage input.
///
/// Expected: malformed tokens fail as invalid in both domains
#[test]
fn rejects_malformed_tokens() {
    let tokens = TokenService::new(&test_config());

    assert_eq!(tokens.verify_user("not-a-token").unwrap_err(), AuthError::InvalidToken);
    assert_eq!(tokens.verify_admin("not-a-token").unwrap_err(), AuthError::InvalidToken);
}
