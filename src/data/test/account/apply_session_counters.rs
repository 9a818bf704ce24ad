use super::*;

use test_utils::factory::account::AccountFactory;

/// Tests incrementing the sleep statistic counters.
///
/// Verifies that each call adds one to the session count and the duration to
/// the total hours, as in-database increments.
///
/// Expected: counters reflect both applied sessions
#[tokio::test]
async fn increments_count_and_total_hours() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = AccountFactory::new(db).build().await?;
    let repo = AccountRepository::new(db);

    repo.apply_session_counters(entity.id, 7.5).await?;
    repo.apply_session_counters(entity.id, 6.0).await?;

    let account = repo.find_by_id(entity.id).await?.unwrap();
    assert_eq!(account.sleep_sessions_count, 2);
    assert_eq!(account.total_sleep_hours, 13.5);

    Ok(())
}

/// Tests that the increments only touch the targeted account.
///
/// Expected: the other account's counters stay zero
#[tokio::test]
async fn leaves_other_accounts_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = AccountFactory::new(db).build().await?;
    let other = AccountFactory::new(db).build().await?;

    let repo = AccountRepository::new(db);
    repo.apply_session_counters(target.id, 8.0).await?;

    let untouched = repo.find_by_id(other.id).await?.unwrap();
    assert_eq!(untouched.sleep_sessions_count, 0);
    assert_eq!(untouched.total_sleep_hours, 0.0);

    Ok(())
}
