use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

use crate::{
    error::{auth::AuthError, AppError},
    service::account::{AccountService, LoginParams, RegisterParams},
};

fn register_params(name: &str, email: &str, password: &str) -> RegisterParams {
    RegisterParams {
        name: Some(name.to_string()),
        email: Some(email.to_string()),
        password: Some(password.to_string()),
    }
}

/// Tests registering and logging in with the same credentials.
///
/// Verifies the full credential roundtrip: the stored hash verifies against
/// the original password and login returns the same account.
///
/// Expected: Ok on both, same account id
#[tokio::test]
async fn registers_and_logs_in() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AccountService::new(db);

    let registered = service
        .register(register_params("Ada", "ada@example.com", "hunter22"))
        .await
        .unwrap();

    let logged_in = service
        .login(LoginParams {
            email: Some("ada@example.com".to_string()),
            password: Some("hunter22".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(logged_in.id, registered.id);
    assert_eq!(logged_in.email, "ada@example.com");

    Ok(())
}

/// Tests registration with missing fields.
///
/// Expected: 400-mapped validation error with the combined field message
#[tokio::test]
async fn rejects_registration_with_missing_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let err = AccountService::new(db)
        .register(RegisterParams {
            name: Some("Ada".to_string()),
            email: None,
            password: Some("hunter22".to_string()),
        })
        .await
        .unwrap_err();

    match err {
        AppError::Validation(msg) => assert_eq!(msg, "Name, email, and password are required"),
        other => panic!("unexpected error: {other}"),
    }

    Ok(())
}

/// Tests registration with a malformed email.
///
/// Expected: validation error for addresses without an `@` or domain dot
#[tokio::test]
async fn rejects_malformed_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AccountService::new(db);

    for email in ["no-at-sign.com", "name@nodot", "two@@example.com", "has space@example.com"] {
        let err = service
            .register(register_params("Ada", email, "hunter22"))
            .await
            .unwrap_err();

        match err {
            AppError::Validation(msg) => assert_eq!(msg, "Invalid email format"),
            other => panic!("unexpected error for {email}: {other}"),
        }
    }

    Ok(())
}

/// Tests registering the same email twice.
///
/// Expected: conflict error, only one account stored
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AccountService::new(db);
    service
        .register(register_params("Ada", "ada@example.com", "hunter22"))
        .await
        .unwrap();

    let err = service
        .register(register_params("Imposter", "ada@example.com", "other"))
        .await
        .unwrap_err();

    match err {
        AppError::Conflict(msg) => assert_eq!(msg, "User already exists with this email"),
        other => panic!("unexpected error: {other}"),
    }

    Ok(())
}

/// Tests login failures.
///
/// Unknown emails and wrong passwords must be indistinguishable to the
/// client.
///
/// Expected: the same invalid-credentials error for both
#[tokio::test]
async fn login_failures_are_indistinguishable() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AccountService::new(db);
    service
        .register(register_params("Ada", "ada@example.com", "hunter22"))
        .await
        .unwrap();

    let wrong_password = service
        .login(LoginParams {
            email: Some("ada@example.com".to_string()),
            password: Some("not-it".to_string()),
        })
        .await
        .unwrap_err();

    let unknown_email = service
        .login(LoginParams {
            email: Some("ghost@example.com".to_string()),
            password: Some("hunter22".to_string()),
        })
        .await
        .unwrap_err();

    for err in [wrong_password, unknown_email] {
        match err {
            AppError::AuthErr(auth) => assert_eq!(auth, AuthError::InvalidCredentials),
            other => panic!("unexpected error: {other}"),
        }
    }

    Ok(())
}

/// Tests the profile lookup for a deleted subject.
///
/// Expected: not-found error with the user message
#[tokio::test]
async fn profile_returns_not_found_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let err = AccountService::new(db).profile(4242).await.unwrap_err();

    match err {
        AppError::NotFound(msg) => assert_eq!(msg, "User not found"),
        other => panic!("unexpected error: {other}"),
    }

    Ok(())
}
