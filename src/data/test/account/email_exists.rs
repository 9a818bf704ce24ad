use super::*;

use test_utils::factory::account::AccountFactory;

/// Tests the registration pre-check for a taken email.
///
/// Expected: Ok(true) for a stored email, Ok(false) otherwise
#[tokio::test]
async fn reports_existing_and_missing_emails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    AccountFactory::new(db).email("taken@example.com").build().await?;

    let repo = AccountRepository::new(db);
    assert!(repo.email_exists("taken@example.com").await?);
    assert!(!repo.email_exists("fresh@example.com").await?);

    Ok(())
}
