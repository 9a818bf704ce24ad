use super::*;

use test_utils::factory::account::AccountFactory;

/// Tests the admin listing and tier counts.
///
/// Verifies that all accounts are returned and that the per-tier counts match
/// the stored subscription strings.
///
/// Expected: three accounts total, one premium, two free
#[tokio::test]
async fn lists_all_accounts_and_counts_tiers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    AccountFactory::new(db).build().await?;
    AccountFactory::new(db).build().await?;
    AccountFactory::new(db).subscription("premium").build().await?;

    let repo = AccountRepository::new(db);

    let accounts = repo.list_all().await?;
    assert_eq!(accounts.len(), 3);

    assert_eq!(repo.count_all().await?, 3);
    assert_eq!(repo.count_by_subscription("free").await?, 2);
    assert_eq!(repo.count_by_subscription("premium").await?, 1);

    Ok(())
}
