use super::*;

use crate::model::account::SubscriptionTier;

/// Tests creating a new account.
///
/// Verifies that the repository stores the account on the free tier with
/// zeroed sleep statistics and returns the domain model without the hash.
///
/// Expected: Ok with free tier and zeroed counters
#[tokio::test]
async fn creates_account_with_free_tier_and_zeroed_counters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);
    let account = repo
        .create(CreateAccountParams {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "$2b$12$C6UzMDM.H6dfI/f/IKcEeO".to_string(),
        })
        .await?;

    assert_eq!(account.name, "Ada");
    assert_eq!(account.email, "ada@example.com");
    assert_eq!(account.subscription, SubscriptionTier::Free);
    assert_eq!(account.sleep_sessions_count, 0);
    assert_eq!(account.total_sleep_hours, 0.0);

    Ok(())
}

/// Tests that the created account can be fetched by id.
///
/// Expected: Ok(Some) with matching fields, Ok(None) for an unknown id
#[tokio::test]
async fn created_account_is_findable_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);
    let created = repo
        .create(CreateAccountParams {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "$2b$12$C6UzMDM.H6dfI/f/IKcEeO".to_string(),
        })
        .await?;

    let found = repo.find_by_id(created.id).await?;
    assert_eq!(found, Some(created));

    let missing = repo.find_by_id(9999).await?;
    assert!(missing.is_none());

    Ok(())
}
