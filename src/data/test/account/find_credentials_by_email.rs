use super::*;

use test_utils::factory::account::AccountFactory;

/// Tests looking up credentials for a stored email.
///
/// Verifies that the lookup returns both the account and its stored password
/// hash for login verification.
///
/// Expected: Ok(Some) with the stored hash
#[tokio::test]
async fn returns_account_with_stored_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = AccountFactory::new(db)
        .email("ada@example.com")
        .password_hash("$2b$12$somestoredhashvalue")
        .build()
        .await?;

    let credentials = AccountRepository::new(db)
        .find_credentials_by_email("ada@example.com")
        .await?
        .unwrap();

    assert_eq!(credentials.account.id, entity.id);
    assert_eq!(credentials.password_hash, "$2b$12$somestoredhashvalue");

    Ok(())
}

/// Tests looking up credentials for an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let credentials = AccountRepository::new(db)
        .find_credentials_by_email("nobody@example.com")
        .await?;

    assert!(credentials.is_none());

    Ok(())
}
